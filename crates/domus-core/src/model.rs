//! Model selection from training-series length.

use domus_domain::MonthPoint;

/// Minimum number of training months before the seasonal model is trusted
/// over the flat average. Below one full annual cycle there is nothing to
/// estimate yearly periodicity from.
pub const SEASONAL_MIN_MONTHS: usize = 12;

/// Explicit model choice, so selection can be asserted independently of
/// fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    ColdStart,
    Seasonal,
}

/// Picks the estimator from the training-series length alone.
pub fn select_model(training: &[MonthPoint]) -> ModelChoice {
    if training.len() < SEASONAL_MIN_MONTHS {
        ModelChoice::ColdStart
    } else {
        ModelChoice::Seasonal
    }
}
