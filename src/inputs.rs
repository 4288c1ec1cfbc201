//! Calculator inputs and the coercion policy applied to them.
//!
//! Inputs typically arrive half-typed from a form, so every field is coerced
//! rather than validated: anything missing, non-numeric, non-finite, zero, or
//! negative becomes `0.0`. A real `0` entry price is therefore
//! indistinguishable from "not entered", which is what the journal form has
//! always done.

use crate::error::{Field, InputError};

/// Coerce a raw number to the calculator's domain: finite and positive, else `0.0`.
#[inline]
pub fn coerce(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}

/// Parse the longest numeric prefix of `text`, after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Trailing garbage is ignored (`"100abc"` is `100`).
/// Returns `None` when no digits lead the string.
pub fn numeric_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let scan_digits = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = scan_digits(end);
    let mut digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = scan_digits(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = scan_digits(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Lenient form-field parse: numeric prefix, then [`coerce`]. Never fails.
#[inline]
pub fn parse_field(text: &str) -> f64 {
    numeric_prefix(text).map(coerce).unwrap_or(0.0)
}

/// The five calculator inputs.
///
/// Fields are public so callers can assemble inputs from any source; the
/// calculator re-applies [`coerce`] to whatever it reads, so out-of-domain
/// values written directly still degrade to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::RiskRequest"))]
pub struct RiskInputs {
    /// Total trading capital.
    pub capital: f64,
    /// Share of capital to risk, in percent (0-100).
    #[cfg_attr(feature = "serde", serde(rename = "risk_pct"))]
    pub risk_percent: f64,
    #[cfg_attr(feature = "serde", serde(rename = "entry"))]
    pub entry_price: f64,
    #[cfg_attr(feature = "serde", serde(rename = "stop_loss"))]
    pub stop_loss_price: f64,
    /// `None` or `Some(0.0)` both mean "no target".
    #[cfg_attr(
        feature = "serde",
        serde(rename = "target", skip_serializing_if = "Option::is_none")
    )]
    pub target_price: Option<f64>,
}

impl RiskInputs {
    /// Build inputs from numbers, coercing each field.
    pub fn new(
        capital: f64,
        risk_percent: f64,
        entry_price: f64,
        stop_loss_price: f64,
        target_price: Option<f64>,
    ) -> Self {
        Self {
            capital: coerce(capital),
            risk_percent: coerce(risk_percent),
            entry_price: coerce(entry_price),
            stop_loss_price: coerce(stop_loss_price),
            target_price: target_price.map(coerce).filter(|t| *t > 0.0),
        }
    }

    /// Build inputs from raw form text with the lenient field parser.
    pub fn from_fields(
        capital: &str,
        risk_percent: &str,
        entry_price: &str,
        stop_loss_price: &str,
        target_price: Option<&str>,
    ) -> Self {
        Self::new(
            parse_field(capital),
            parse_field(risk_percent),
            parse_field(entry_price),
            parse_field(stop_loss_price),
            target_price.map(parse_field),
        )
    }

    /// Build inputs from raw text, rejecting anything the lenient parser
    /// would have silently zeroed.
    ///
    /// Required fields must be finite positive numbers. The target may be
    /// absent, empty, or zero (no target) but not negative or non-numeric.
    pub fn parse_strict(
        capital: Option<&str>,
        risk_percent: Option<&str>,
        entry_price: Option<&str>,
        stop_loss_price: Option<&str>,
        target_price: Option<&str>,
    ) -> Result<Self, InputError> {
        let target = match target_price.map(str::trim).filter(|t| !t.is_empty()) {
            None => None,
            Some(text) => {
                let value = parse_number(Field::TargetPrice, text)?;
                if !value.is_finite() || value < 0.0 {
                    return Err(InputError::NotPositive {
                        field: Field::TargetPrice,
                        value,
                    });
                }
                Some(value)
            }
        };

        Ok(Self::new(
            required(Field::Capital, capital)?,
            required(Field::RiskPercent, risk_percent)?,
            required(Field::EntryPrice, entry_price)?,
            required(Field::StopLossPrice, stop_loss_price)?,
            target,
        ))
    }

    /// Read one field. The target reads as `0.0` when absent.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Capital => self.capital,
            Field::RiskPercent => self.risk_percent,
            Field::EntryPrice => self.entry_price,
            Field::StopLossPrice => self.stop_loss_price,
            Field::TargetPrice => self.target_price.unwrap_or(0.0),
        }
    }

    /// Overwrite one field, coercing the value. A zero target clears it.
    pub fn set(&mut self, field: Field, value: f64) {
        let value = coerce(value);
        match field {
            Field::Capital => self.capital = value,
            Field::RiskPercent => self.risk_percent = value,
            Field::EntryPrice => self.entry_price = value,
            Field::StopLossPrice => self.stop_loss_price = value,
            Field::TargetPrice => self.target_price = Some(value).filter(|t| *t > 0.0),
        }
    }

    /// Return a copy with the target replaced.
    pub fn with_target(mut self, target_price: f64) -> Self {
        self.set(Field::TargetPrice, target_price);
        self
    }

    /// The coerced target, or `None` when absent or zero.
    #[inline]
    pub fn target(&self) -> Option<f64> {
        self.target_price.map(coerce).filter(|t| *t > 0.0)
    }
}

fn parse_number(field: Field, text: &str) -> Result<f64, InputError> {
    text.parse::<f64>().map_err(|_| InputError::NotNumeric {
        field,
        value: text.to_string(),
    })
}

fn required(field: Field, text: Option<&str>) -> Result<f64, InputError> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(InputError::Missing(field))?;
    let value = parse_number(field, text)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}

#[cfg(feature = "serde")]
mod wire {
    //! The journal's JSON request shape, with form-style leniency.

    use serde::Deserialize;

    use super::{RiskInputs, coerce, parse_field};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(f64),
        Text(String),
    }

    impl Lenient {
        fn value(self) -> f64 {
            match self {
                Lenient::Number(x) => coerce(x),
                Lenient::Text(s) => parse_field(&s),
            }
        }
    }

    fn value(field: Option<Lenient>) -> f64 {
        field.map(Lenient::value).unwrap_or(0.0)
    }

    #[derive(Deserialize)]
    pub(super) struct RiskRequest {
        #[serde(default)]
        capital: Option<Lenient>,
        #[serde(default, alias = "risk_percent")]
        risk_pct: Option<Lenient>,
        #[serde(default, alias = "entry_price")]
        entry: Option<Lenient>,
        #[serde(default, alias = "stop_loss_price")]
        stop_loss: Option<Lenient>,
        #[serde(default, alias = "target_price")]
        target: Option<Lenient>,
    }

    impl From<RiskRequest> for RiskInputs {
        fn from(req: RiskRequest) -> Self {
            RiskInputs::new(
                value(req.capital),
                value(req.risk_pct),
                value(req.entry),
                value(req.stop_loss),
                req.target.map(Lenient::value),
            )
        }
    }
}
