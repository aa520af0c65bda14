use thiserror::Error;

/// Error type covering every failure mode of the forecasting pipeline.
///
/// Every variant is terminal for the request: nothing is retried and no
/// partial result is returned.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Missing or unusable building selector (user-facing message).
    #[error("Invalid building selector: {0}")]
    Validation(String),
    /// The expense store query failed (connectivity, auth, corrupt data).
    #[error("Store error: {0}")]
    Store(String),
    /// The building has no expense records at all.
    #[error("No expense data for this building")]
    NoData,
    /// Records exist but none remain usable as history.
    #[error("No historical data: {0}")]
    NoHistory(String),
    /// The seasonal model could not be fitted. Never downgraded to the
    /// cold-start estimator.
    #[error("Model fit failed: {0}")]
    ModelFit(String),
}
