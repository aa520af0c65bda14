//! Log-space transform pair used by the seasonal model.
//!
//! Expense series are non-negative and right-skewed; fitting on
//! `ln(1 + v)` stabilizes variance, and the inverse `exp(x) - 1` keeps
//! forecasts above -1 before the reconciler's zero floor.

/// Forward transform into log space.
pub fn to_log_space(value: f64) -> f64 {
    value.ln_1p()
}

/// Inverse transform back to the original value scale.
pub fn from_log_space(value: f64) -> f64 {
    value.exp_m1()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_recovers_non_negative_values() {
        for value in [0.0, 0.01, 1.0, 42.5, 1999.99, 250_000.0] {
            let restored = from_log_space(to_log_space(value));
            assert!(
                (restored - value).abs() < 1e-9 * value.max(1.0),
                "round trip drifted for {value}: got {restored}"
            );
        }
    }

    #[test]
    fn zero_maps_to_zero_in_both_directions() {
        assert_eq!(to_log_space(0.0), 0.0);
        assert_eq!(from_log_space(0.0), 0.0);
    }
}
