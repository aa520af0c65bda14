//! Forecast output types: model points, reconciled rows, and the report.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single model output point on the original value scale.
///
/// The decomposition fields are populated only by the seasonal model; the
/// cold-start estimator leaves them `None`. `seasonal` carries the yearly
/// component in log-scale units, matching the upstream contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(with = "crate::month::month_format")]
    pub date: NaiveDate,
    pub predicted: f64,
    pub trend: Option<f64>,
    pub seasonal: Option<f64>,
}

/// One row of the merged actual/forecast sequence.
///
/// Invariant: `actual` and `forecast` are never both `Some`. The
/// decomposition fields accompany only a non-suppressed forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciledPoint {
    #[serde(with = "crate::month::month_format")]
    pub date: NaiveDate,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub trend: Option<f64>,
    pub seasonal: Option<f64>,
}

/// Identifies which estimator produced the forecast values in a report.
/// Serializes as the user-facing method label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastMethod {
    #[serde(rename = "Statistical Average (Cold Start)")]
    ColdStart,
    #[serde(rename = "Seasonal Log-Normal Model")]
    Seasonal,
}

impl ForecastMethod {
    pub fn label(self) -> &'static str {
        match self {
            ForecastMethod::ColdStart => "Statistical Average (Cold Start)",
            ForecastMethod::Seasonal => "Seasonal Log-Normal Model",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The full response payload: the method label plus the chronological
/// actual/forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub method: ForecastMethod,
    pub data: Vec<ReconciledPoint>,
}
