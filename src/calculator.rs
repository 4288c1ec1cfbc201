//! Position sizing from a fixed-fraction risk budget.
//!
//! The position is sized so that hitting the stop loses at most
//! `capital * risk_percent / 100`. Sizes are floored to whole units, so the
//! realized max loss never exceeds the budget.
//!
//! Every amount stays finite: a budget or product that overflows `f64`
//! clamps to `f64::MAX`, and the unit count saturates at `u64::MAX`.

use crate::inputs::{RiskInputs, coerce};
use crate::result::{RiskOutcome, RiskResult};
use crate::rounding::Rounding;

/// Stateless position-size and risk/reward calculator.
///
/// The only setting is the tie rule for two-decimal rounding; every rounded
/// field of one calculator uses the same rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionRiskCalculator {
    rounding: Rounding,
}

impl PositionRiskCalculator {
    /// Calculator with the default rounding ([`Rounding::HalfAwayFromZero`]).
    pub const fn new() -> Self {
        Self {
            rounding: Rounding::HalfAwayFromZero,
        }
    }

    pub const fn with_rounding(rounding: Rounding) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Size a position and summarize its risk/reward.
    ///
    /// Returns [`RiskOutcome::NotComputable`] when capital, risk percent,
    /// entry, or stop is zero after coercion. Never panics.
    pub fn compute(&self, inputs: &RiskInputs) -> RiskOutcome {
        let capital = coerce(inputs.capital);
        let risk_percent = coerce(inputs.risk_percent);
        let entry = coerce(inputs.entry_price);
        let stop = coerce(inputs.stop_loss_price);

        if capital == 0.0 || risk_percent == 0.0 || entry == 0.0 || stop == 0.0 {
            return RiskOutcome::NotComputable;
        }

        let round2 = |x: f64| self.rounding.round2(x);

        let risk_amount = (capital * (risk_percent / 100.0)).min(f64::MAX);
        let risk_distance = (entry - stop).abs();
        let position_size = if risk_distance > 0.0 {
            // Saturating cast: huge budgets over tiny distances clamp to u64::MAX.
            (risk_amount / risk_distance).floor() as u64
        } else {
            0
        };
        let units = position_size as f64;
        let max_loss = round2(units * risk_distance);

        let (risk_reward_ratio, projected_profit) = match inputs.target() {
            Some(target) if risk_distance > 0.0 => {
                let reward_distance = (target - entry).abs();
                (
                    Some(round2(reward_distance / risk_distance)),
                    Some(round2(units * reward_distance)),
                )
            }
            _ => (None, None),
        };

        RiskOutcome::Computed(RiskResult {
            position_size,
            max_loss,
            risk_reward_ratio,
            projected_profit,
            risk_amount: round2(risk_amount),
            risk_distance: round2(risk_distance),
            capital_at_risk_pct: round2(max_loss / capital * 100.0),
        })
    }
}

/// Compute with the default calculator.
pub fn compute(inputs: &RiskInputs) -> RiskOutcome {
    PositionRiskCalculator::new().compute(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computed(inputs: RiskInputs) -> RiskResult {
        compute(&inputs)
            .into_result()
            .expect("inputs should be computable")
    }

    #[test]
    fn long_trade_with_target() {
        let r = computed(RiskInputs::new(100_000.0, 1.0, 100.0, 95.0, Some(110.0)));
        assert_eq!(r.position_size, 200);
        assert_eq!(r.max_loss, 1000.0);
        assert_eq!(r.risk_reward_ratio, Some(2.0));
        assert_eq!(r.projected_profit, Some(2000.0));
        assert_eq!(r.risk_amount, 1000.0);
        assert_eq!(r.risk_distance, 5.0);
        assert_eq!(r.capital_at_risk_pct, 1.0);
    }

    #[test]
    fn short_trade_uses_absolute_distances() {
        // Stop above entry, target below.
        let r = computed(RiskInputs::new(100_000.0, 1.0, 100.0, 105.0, Some(90.0)));
        assert_eq!(r.position_size, 200);
        assert_eq!(r.max_loss, 1000.0);
        assert_eq!(r.risk_reward_ratio, Some(2.0));
        assert_eq!(r.projected_profit, Some(2000.0));
    }

    #[test]
    fn floors_fractional_units() {
        // 1000 / 3 = 333.33 units
        let r = computed(RiskInputs::new(100_000.0, 1.0, 100.0, 97.0, None));
        assert_eq!(r.position_size, 333);
        assert_eq!(r.max_loss, 999.0);
        assert!(r.max_loss <= r.risk_amount);
        assert_eq!(r.capital_at_risk_pct, 1.0);
    }

    #[test]
    fn budget_smaller_than_one_unit() {
        let r = computed(RiskInputs::new(1000.0, 1.0, 100.0, 80.0, Some(150.0)));
        assert_eq!(r.position_size, 0);
        assert_eq!(r.max_loss, 0.0);
        assert_eq!(r.risk_reward_ratio, Some(2.5));
        assert_eq!(r.projected_profit, Some(0.0));
    }

    #[test]
    fn stop_on_entry_sizes_nothing() {
        let r = computed(RiskInputs::new(50_000.0, 2.0, 200.0, 200.0, Some(220.0)));
        assert_eq!(r.position_size, 0);
        assert_eq!(r.max_loss, 0.0);
        assert_eq!(r.risk_reward_ratio, None);
        assert_eq!(r.projected_profit, None);
        assert_eq!(r.rating(), None);
    }

    #[test]
    fn zero_required_field_is_not_computable() {
        let full = RiskInputs::new(100_000.0, 1.0, 100.0, 95.0, Some(110.0));
        for zeroed in [
            RiskInputs { capital: 0.0, ..full },
            RiskInputs { risk_percent: 0.0, ..full },
            RiskInputs { entry_price: 0.0, ..full },
            RiskInputs { stop_loss_price: 0.0, ..full },
        ] {
            assert_eq!(compute(&zeroed), RiskOutcome::NotComputable);
        }
    }

    #[test]
    fn raw_field_writes_are_coerced() {
        let inputs = RiskInputs {
            capital: f64::NAN,
            ..RiskInputs::new(100_000.0, 1.0, 100.0, 95.0, None)
        };
        assert_eq!(compute(&inputs), RiskOutcome::NotComputable);

        let inputs = RiskInputs {
            stop_loss_price: -95.0,
            ..RiskInputs::new(100_000.0, 1.0, 100.0, 95.0, None)
        };
        assert!(!compute(&inputs).is_computable());
    }

    #[test]
    fn ratio_tie_follows_rounding_rule() {
        // reward 1, risk 8 → 0.125
        let inputs = RiskInputs::new(800.0, 1.0, 100.0, 92.0, Some(101.0));
        let away = computed(inputs);
        assert_eq!(away.risk_reward_ratio, Some(0.13));

        let even = PositionRiskCalculator::with_rounding(Rounding::HalfEven)
            .compute(&inputs)
            .into_result()
            .unwrap();
        assert_eq!(even.risk_reward_ratio, Some(0.12));
        assert_eq!(even.position_size, away.position_size);
    }

    #[test]
    fn huge_budget_saturates_size() {
        let r = computed(RiskInputs::new(1e300, 100.0, 100.0, 99.999_999, None));
        assert_eq!(r.position_size, u64::MAX);
    }

    #[test]
    fn overflowing_budget_clamps_to_finite() {
        let r = computed(RiskInputs::new(1e308, 1000.0, 100.0, 95.0, Some(1e308)));
        assert_eq!(r.risk_amount, f64::MAX);
        assert_eq!(r.position_size, u64::MAX);
        assert_eq!(r.position_size, (r.risk_amount / r.risk_distance).floor() as u64);
        for value in [
            r.max_loss,
            r.risk_amount,
            r.capital_at_risk_pct,
            r.risk_reward_ratio.unwrap(),
            r.projected_profit.unwrap(),
        ] {
            assert!(value.is_finite(), "value = {value}");
        }
    }

    #[test]
    fn default_calculator_rounding() {
        assert_eq!(PositionRiskCalculator::default(), PositionRiskCalculator::new());
        assert_eq!(PositionRiskCalculator::new().rounding(), Rounding::HalfAwayFromZero);
    }
}
