//! domus-core
//!
//! Forecasting pipeline for building expense ledgers: monthly series
//! construction, model selection, the cold-start and seasonal estimators,
//! and the actual/forecast reconciler. Depends on domus-domain. No CLI, no
//! terminal I/O, no concrete storage backend.

pub mod cold_start;
pub mod error;
pub mod forecast_service;
pub mod model;
pub mod reconcile_service;
pub mod seasonal;
pub mod series_service;
pub mod store;
pub mod time;
pub mod transform;

pub use cold_start::ColdStartEstimator;
pub use error::CoreError;
pub use forecast_service::{ForecastService, DEFAULT_HORIZON_MONTHS};
pub use model::{select_model, ModelChoice, SEASONAL_MIN_MONTHS};
pub use reconcile_service::ReconcileService;
pub use seasonal::SeasonalModel;
pub use series_service::SeriesService;
pub use store::ExpenseStore;
pub use time::{Clock, SystemClock};
