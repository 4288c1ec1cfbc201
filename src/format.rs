//! Presentation of calculator results.
//!
//! The calculator returns plain numbers; this module is the display policy a
//! front end applies on top: currency symbol, locale digit grouping, the
//! `1 : r` ratio notation, and placeholders for undefined values.

use std::fmt;

use crate::result::RiskResult;

/// Placeholder for an undefined or zero risk/reward ratio.
pub const NO_RATIO: &str = "N/A";
/// Placeholder for an undefined or zero projected profit.
pub const NO_PROFIT: &str = "—";

/// Digit grouping for the integer part of amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Grouping {
    /// Lakh/crore grouping: `1,00,00,000`.
    #[default]
    Indian,
    /// Thousands grouping: `10,000,000`.
    Western,
}

/// Strip a two-decimal rendering down to its significant fraction digits.
fn trimmed(value: f64) -> (String, String) {
    let text = format!("{:.2}", value.abs());
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    (int.to_string(), frac.trim_end_matches('0').to_string())
}

fn group_int(int: &str, grouping: Grouping) -> String {
    let digits = int.as_bytes();
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 2);
    for (i, &d) in digits.iter().enumerate() {
        let remaining = n - i;
        if i > 0 {
            let boundary = match grouping {
                Grouping::Western => remaining % 3 == 0,
                Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
            };
            if boundary {
                out.push(',');
            }
        }
        out.push(d as char);
    }
    out
}

/// Render `value` with grouping and up to two fraction digits, trailing zeros dropped.
///
/// ```
/// use riskbook::format::{group_digits, Grouping};
///
/// assert_eq!(group_digits(1234567.5, Grouping::Indian), "12,34,567.5");
/// assert_eq!(group_digits(1234567.5, Grouping::Western), "1,234,567.5");
/// ```
pub fn group_digits(value: f64, grouping: Grouping) -> String {
    let (int, frac) = trimmed(value);
    let negative = value < 0.0 && (int != "0" || !frac.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_int(&int, grouping));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

/// Ratio in `1 : r` notation, or [`NO_RATIO`].
pub fn ratio_text(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) if r != 0.0 => {
            let (int, frac) = trimmed(r);
            if frac.is_empty() {
                format!("1 : {int}")
            } else {
                format!("1 : {int}.{frac}")
            }
        }
        _ => NO_RATIO.to_string(),
    }
}

/// Currency and grouping preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayStyle {
    pub currency: String,
    pub grouping: Grouping,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            currency: "₹".into(),
            grouping: Grouping::Indian,
        }
    }
}

impl DisplayStyle {
    pub fn new(currency: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            currency: currency.into(),
            grouping,
        }
    }

    /// `₹1,00,000.5` style amount.
    pub fn money(&self, value: f64) -> String {
        format!("{}{}", self.currency, group_digits(value, self.grouping))
    }

    /// Projected profit, or [`NO_PROFIT`] when undefined or zero.
    pub fn profit(&self, profit: Option<f64>) -> String {
        match profit {
            Some(p) if p != 0.0 => self.money(p),
            _ => NO_PROFIT.to_string(),
        }
    }

    /// Wrap a result for display.
    pub fn view<'a>(&'a self, result: &'a RiskResult) -> ResultView<'a> {
        ResultView {
            result,
            style: self,
        }
    }
}

/// Multi-line summary of a [`RiskResult`] under a [`DisplayStyle`].
#[derive(Clone, Copy, Debug)]
pub struct ResultView<'a> {
    result: &'a RiskResult,
    style: &'a DisplayStyle,
}

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let s = self.style;
        let rating = match r.rating() {
            Some(rating) if r.risk_reward_ratio != Some(0.0) => format!(" ({rating})"),
            _ => String::new(),
        };
        writeln!(f, "  Position size   : {}", r.position_size)?;
        writeln!(f, "  Risk amount     : {}", s.money(r.risk_amount))?;
        writeln!(
            f,
            "  SL points       : {}",
            group_digits(r.risk_distance, s.grouping)
        )?;
        writeln!(f, "  Max loss        : {}", s.money(r.max_loss))?;
        writeln!(
            f,
            "  Capital at risk : {}%",
            group_digits(r.capital_at_risk_pct, s.grouping)
        )?;
        writeln!(
            f,
            "  Risk : reward   : {}{}",
            ratio_text(r.risk_reward_ratio),
            rating
        )?;
        write!(f, "  Target profit   : {}", s.profit(r.projected_profit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        let cases = [
            (0.0, "0"),
            (999.0, "999"),
            (1000.0, "1,000"),
            (99_999.0, "99,999"),
            (100_000.0, "1,00,000"),
            (10_000_000.0, "1,00,00,000"),
            (1234.5, "1,234.5"),
            (1234.56, "1,234.56"),
        ];
        for (value, expected) in cases {
            assert_eq!(group_digits(value, Grouping::Indian), expected, "value = {value}");
        }
    }

    #[test]
    fn western_grouping() {
        assert_eq!(group_digits(100_000.0, Grouping::Western), "100,000");
        assert_eq!(group_digits(10_000_000.0, Grouping::Western), "10,000,000");
        assert_eq!(group_digits(12.3, Grouping::Western), "12.3");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(group_digits(-1500.0, Grouping::Western), "-1,500");
        assert_eq!(group_digits(-0.001, Grouping::Western), "0");
    }

    #[test]
    fn ratio_placeholders() {
        assert_eq!(ratio_text(Some(2.0)), "1 : 2");
        assert_eq!(ratio_text(Some(0.13)), "1 : 0.13");
        assert_eq!(ratio_text(Some(0.0)), NO_RATIO);
        assert_eq!(ratio_text(None), NO_RATIO);
    }

    #[test]
    fn profit_placeholders() {
        let style = DisplayStyle::default();
        assert_eq!(style.profit(Some(2000.0)), "₹2,000");
        assert_eq!(style.profit(Some(0.0)), NO_PROFIT);
        assert_eq!(style.profit(None), NO_PROFIT);
    }

    #[test]
    fn view_renders_all_lines() {
        let result = RiskResult {
            position_size: 200,
            max_loss: 1000.0,
            risk_reward_ratio: Some(2.0),
            projected_profit: Some(2000.0),
            risk_amount: 1000.0,
            risk_distance: 5.0,
            capital_at_risk_pct: 1.0,
        };
        let style = DisplayStyle::new("$", Grouping::Western);
        let text = style.view(&result).to_string();
        assert!(text.contains("Position size   : 200"));
        assert!(text.contains("Max loss        : $1,000"));
        assert!(text.contains("Risk : reward   : 1 : 2 (favorable)"));
        assert!(text.contains("Target profit   : $2,000"));
        assert_eq!(text.lines().count(), 7);
    }
}
