//! Risk/reward rating tiers.

use std::fmt;

/// Ratio at or above which a trade is [`RewardRating::Favorable`].
pub const FAVORABLE_RATIO: f64 = 2.0;
/// Ratio at or above which a trade is at least [`RewardRating::Marginal`].
pub const MARGINAL_RATIO: f64 = 1.0;

/// How attractive a risk/reward ratio is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardRating {
    /// Ratio below 1: the stop is farther than the target.
    Unfavorable,
    /// Ratio in `[1, 2)`.
    Marginal,
    /// Ratio of 2 or more.
    Favorable,
}

impl RewardRating {
    /// Classify a ratio. NaN classifies as unfavorable.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= FAVORABLE_RATIO {
            RewardRating::Favorable
        } else if ratio >= MARGINAL_RATIO {
            RewardRating::Marginal
        } else {
            RewardRating::Unfavorable
        }
    }
}

impl fmt::Display for RewardRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardRating::Favorable => write!(f, "favorable"),
            RewardRating::Marginal => write!(f, "marginal"),
            RewardRating::Unfavorable => write!(f, "unfavorable"),
        }
    }
}
