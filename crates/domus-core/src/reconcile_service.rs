//! Merges actual history and model forecast into one display sequence.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use domus_domain::{ForecastPoint, MonthPoint, ReconciledPoint};

pub struct ReconcileService;

impl ReconcileService {
    /// Merges actuals and forecast over the union of their month keys,
    /// ascending.
    ///
    /// Actuals always win: a month with real data never carries a forecast
    /// value, and the decomposition fields accompany only a forecast that
    /// survives the merge. Negative predictions are floored at zero.
    pub fn merge(history: &[MonthPoint], forecast: &[ForecastPoint]) -> Vec<ReconciledPoint> {
        let mut keys: BTreeSet<NaiveDate> = history.iter().map(|point| point.date).collect();
        keys.extend(forecast.iter().map(|point| point.date));

        keys.into_iter()
            .map(|date| {
                let actual = history
                    .iter()
                    .find(|point| point.date == date)
                    .map(|point| round2(point.value));

                let mut merged = ReconciledPoint {
                    date,
                    actual,
                    forecast: None,
                    trend: None,
                    seasonal: None,
                };
                if merged.actual.is_none() {
                    if let Some(model) = forecast.iter().find(|point| point.date == date) {
                        // Zero floor against numerical underflow in the
                        // inverse transform.
                        merged.forecast = Some(round2(model.predicted).max(0.0));
                        merged.trend = model.trend.map(round2);
                        merged.seasonal = model.seasonal.map(round4);
                    }
                }
                merged
            })
            .collect()
    }
}

/// Rounds to 2 decimal places for currency-facing values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to 4 decimal places; used for the log-scale seasonal component.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
