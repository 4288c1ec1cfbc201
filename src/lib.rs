//! # riskbook
//!
//! Position sizing and risk/reward summaries for a trade journal.
//!
//! Given capital, a risk tolerance in percent, and entry/stop/target prices,
//! the calculator sizes a position so that hitting the stop loses no more than
//! the risk budget, then reports the max loss, risk/reward ratio, and projected
//! profit.
//!
//! ## Quick Start
//!
//! ```
//! use riskbook::{RiskInputs, compute};
//!
//! // ₹1,00,000 capital, risking 1% on a 100 → 95 stop with a 110 target
//! let inputs = RiskInputs::new(100_000.0, 1.0, 100.0, 95.0, Some(110.0));
//! let result = compute(&inputs).into_result().unwrap();
//!
//! assert_eq!(result.position_size, 200);
//! assert_eq!(result.max_loss, 1000.0);
//! assert_eq!(result.risk_reward_ratio, Some(2.0));
//! assert_eq!(result.projected_profit, Some(2000.0));
//! ```
//!
//! ## Incomplete Input
//!
//! Inputs are coerced, never rejected: missing, non-numeric, or non-positive
//! values become `0`. Zero capital, risk, entry, or stop yields
//! [`RiskOutcome::NotComputable`], the signal to hide the result.
//!
//! ```
//! use riskbook::{RiskInputs, RiskOutcome, compute};
//!
//! // Stop-loss field still empty while the user types
//! let inputs = RiskInputs::from_fields("100000", "1", "100", "", None);
//! assert_eq!(compute(&inputs), RiskOutcome::NotComputable);
//! ```
//!
//! ## Undefined Reward
//!
//! Without a target, or with the stop on the entry price, the ratio and
//! profit are `None`:
//!
//! ```
//! use riskbook::{RiskInputs, compute};
//!
//! let result = compute(&RiskInputs::new(50_000.0, 2.0, 200.0, 200.0, Some(220.0)))
//!     .into_result()
//!     .unwrap();
//! assert_eq!(result.position_size, 0);
//! assert_eq!(result.risk_reward_ratio, None);
//! ```
//!
//! ## Rounding
//!
//! | Rule | `0.125` | `0.375` |
//! |------|---------|---------|
//! | **HalfAwayFromZero** (default) | `0.13` | `0.38` |
//! | **HalfEven** | `0.12` | `0.38` |
//!
//! ```
//! use riskbook::{PositionRiskCalculator, RiskInputs, Rounding};
//!
//! let calc = PositionRiskCalculator::with_rounding(Rounding::HalfEven);
//! let inputs = RiskInputs::new(800.0, 1.0, 100.0, 92.0, Some(101.0));
//! let result = calc.compute(&inputs).into_result().unwrap();
//! assert_eq!(result.risk_reward_ratio, Some(0.12));
//! ```
//!
//! ## Display
//!
//! ```
//! use riskbook::{RiskInputs, compute};
//! use riskbook::format::DisplayStyle;
//!
//! let result = compute(&RiskInputs::new(1_000_000.0, 1.0, 100.0, 95.0, Some(110.0)))
//!     .into_result()
//!     .unwrap();
//! let style = DisplayStyle::default();
//! assert_eq!(style.money(result.max_loss), "₹10,000");
//! assert_eq!(style.money(result.projected_profit.unwrap()), "₹20,000");
//! ```

mod calculator;
mod error;
pub mod format;
pub mod inputs;
mod rating;
mod result;
pub mod rounding;

// Re-export public API
pub use calculator::{PositionRiskCalculator, compute};
pub use error::{Field, InputError};
pub use inputs::RiskInputs;
pub use rating::{FAVORABLE_RATIO, MARGINAL_RATIO, RewardRating};
pub use result::{RiskOutcome, RiskResult};
pub use rounding::{Rounding, round2};
