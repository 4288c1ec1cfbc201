//! Two-decimal rounding for monetary amounts and ratios.

/// Tie-breaking rule used by [`Rounding::round2`].
///
/// Both rules operate on `x * 100.0` as an `f64`, so a value such as `1.005`
/// (stored as `1.00499999...`) rounds down under either rule. Exact binary
/// ties like `0.125` are where the two rules differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Ties round away from zero: `0.125 → 0.13`, `0.375 → 0.38`.
    #[default]
    HalfAwayFromZero,
    /// Ties round to the even cent: `0.125 → 0.12`, `0.375 → 0.38`.
    HalfEven,
}

impl Rounding {
    /// Round `x` to two decimal places under this rule.
    ///
    /// Magnitudes too large to scale by 100 have no fraction digits and are
    /// returned as-is; infinities clamp to `f64::MAX`/`f64::MIN`.
    #[inline]
    pub fn round2(self, x: f64) -> f64 {
        let scaled = x * 100.0;
        if scaled.is_infinite() {
            return x.clamp(f64::MIN, f64::MAX);
        }
        let rounded = match self {
            Rounding::HalfAwayFromZero => scaled.round(),
            Rounding::HalfEven => scaled.round_ties_even(),
        };
        rounded / 100.0
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::HalfAwayFromZero => write!(f, "half_away_from_zero"),
            Rounding::HalfEven => write!(f, "half_even"),
        }
    }
}

/// Round to two decimals with the default rule ([`Rounding::HalfAwayFromZero`]).
#[inline]
pub fn round2(x: f64) -> f64 {
    Rounding::default().round2(x)
}
