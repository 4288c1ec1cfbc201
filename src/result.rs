//! Calculator output types.

use crate::rating::RewardRating;

/// Position size and risk/reward summary for one set of inputs.
///
/// Every monetary amount and ratio is already rounded to two decimals.
/// `None` in the reward fields means "undefined": no target was given, or
/// the stop sits on the entry price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskResult {
    /// Whole units to trade.
    pub position_size: u64,
    /// Loss if the stop is hit at `position_size`.
    pub max_loss: f64,
    /// Reward distance over risk distance.
    #[cfg_attr(feature = "serde", serde(rename = "rr_ratio"))]
    pub risk_reward_ratio: Option<f64>,
    /// Gain if the target is hit at `position_size`.
    #[cfg_attr(feature = "serde", serde(rename = "potential_profit"))]
    pub projected_profit: Option<f64>,
    /// Capital times risk percent: the budget the position is sized against.
    pub risk_amount: f64,
    /// Absolute entry-to-stop distance per unit.
    #[cfg_attr(feature = "serde", serde(rename = "sl_points"))]
    pub risk_distance: f64,
    /// `max_loss` as a percentage of capital.
    pub capital_at_risk_pct: f64,
}

impl RiskResult {
    /// Rating of the risk/reward ratio, if one is defined.
    pub fn rating(&self) -> Option<RewardRating> {
        self.risk_reward_ratio.map(RewardRating::from_ratio)
    }

    /// True when both reward fields are defined.
    pub fn has_reward(&self) -> bool {
        self.risk_reward_ratio.is_some() && self.projected_profit.is_some()
    }
}

/// Outcome of a calculation.
///
/// `NotComputable` is not an error: it tells the caller to hide or clear any
/// previously displayed result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RiskOutcome {
    Computed(RiskResult),
    NotComputable,
}

impl RiskOutcome {
    /// The result, if computable.
    pub fn result(&self) -> Option<&RiskResult> {
        match self {
            RiskOutcome::Computed(r) => Some(r),
            RiskOutcome::NotComputable => None,
        }
    }

    /// Consume into the result, if computable.
    pub fn into_result(self) -> Option<RiskResult> {
        match self {
            RiskOutcome::Computed(r) => Some(r),
            RiskOutcome::NotComputable => None,
        }
    }

    pub fn is_computable(&self) -> bool {
        matches!(self, RiskOutcome::Computed(_))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RiskOutcome {
    /// Computed results serialize as the result object plus `"computable": true`;
    /// the sentinel serializes as `{"computable": false}`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Tagged<'a> {
            computable: bool,
            #[serde(flatten, skip_serializing_if = "Option::is_none")]
            result: Option<&'a RiskResult>,
        }

        Tagged {
            computable: self.is_computable(),
            result: self.result(),
        }
        .serialize(serializer)
    }
}
