//! Flat-mean estimator for buildings with too little history.

use domus_domain::{add_months, ForecastPoint, MonthPoint};

pub struct ColdStartEstimator;

impl ColdStartEstimator {
    /// Forecasts `horizon` consecutive month-start points immediately after
    /// the last training month, each equal to the arithmetic mean of the
    /// training values. No decomposition, no randomness.
    ///
    /// The caller guarantees a non-empty training series; an empty one
    /// yields an empty forecast.
    pub fn forecast(training: &[MonthPoint], horizon: u32) -> Vec<ForecastPoint> {
        let Some(last) = training.last() else {
            return Vec::new();
        };
        let mean = training.iter().map(|point| point.value).sum::<f64>() / training.len() as f64;

        (1..=horizon as i32)
            .map(|step| ForecastPoint {
                date: add_months(last.date, step),
                predicted: mean,
                trend: None,
                seasonal: None,
            })
            .collect()
    }
}
