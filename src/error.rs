//! Errors for strict input parsing.
//!
//! The calculator itself never fails; these are only produced by
//! [`RiskInputs::parse_strict`](crate::RiskInputs::parse_strict).

use std::fmt;

/// One of the five calculator input fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    Capital,
    RiskPercent,
    EntryPrice,
    StopLossPrice,
    TargetPrice,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Capital,
        Field::RiskPercent,
        Field::EntryPrice,
        Field::StopLossPrice,
        Field::TargetPrice,
    ];

    /// Short name as used on the command line and in JSON requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Capital => "capital",
            Field::RiskPercent => "risk_pct",
            Field::EntryPrice => "entry",
            Field::StopLossPrice => "stop_loss",
            Field::TargetPrice => "target",
        }
    }

    /// Look a field up by its short name or a common alias.
    pub fn from_name(name: &str) -> Option<Field> {
        match name.to_ascii_lowercase().as_str() {
            "capital" | "cap" => Some(Field::Capital),
            "risk_pct" | "risk" => Some(Field::RiskPercent),
            "entry" => Some(Field::EntryPrice),
            "stop_loss" | "sl" | "stop" => Some(Field::StopLossPrice),
            "target" | "tgt" => Some(Field::TargetPrice),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejections from strict input parsing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A required field was empty or absent.
    #[error("{0} is required")]
    Missing(Field),
    /// The text did not parse as a number.
    #[error("{field} is not a number: {value:?}")]
    NotNumeric { field: Field, value: String },
    /// The number parsed but is zero, negative, or non-finite.
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: Field, value: f64 },
}

impl InputError {
    /// The field that was rejected.
    pub fn field(&self) -> Field {
        match self {
            InputError::Missing(field) => *field,
            InputError::NotNumeric { field, .. } | InputError::NotPositive { field, .. } => *field,
        }
    }
}
