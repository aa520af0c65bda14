//! Pipeline orchestration: fetch, build series, select, fit, reconcile.

use domus_domain::{ForecastMethod, ForecastReport};

use crate::{
    cold_start::ColdStartEstimator,
    model::{select_model, ModelChoice},
    reconcile_service::ReconcileService,
    seasonal::SeasonalModel,
    series_service::SeriesService,
    store::ExpenseStore,
    time::Clock,
    CoreError,
};

/// Number of months forecast past the last observed training month.
pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// Runs the whole forecast for one building: single-threaded, synchronous,
/// no retries, all-or-nothing.
pub struct ForecastService;

impl ForecastService {
    pub fn run(
        store: &dyn ExpenseStore,
        clock: &dyn Clock,
        building_id: &str,
    ) -> Result<ForecastReport, CoreError> {
        Self::run_with_horizon(store, clock, building_id, DEFAULT_HORIZON_MONTHS)
    }

    pub fn run_with_horizon(
        store: &dyn ExpenseStore,
        clock: &dyn Clock,
        building_id: &str,
        horizon: u32,
    ) -> Result<ForecastReport, CoreError> {
        let selector = building_id.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case("all") {
            return Err(CoreError::Validation(
                "select a single building to analyse".into(),
            ));
        }

        let records = store.expenses_for_building(selector)?;
        let series = SeriesService::build(&records, clock.today())?;
        if series.training.is_empty() {
            return Err(CoreError::NoHistory(
                "every record is excluded from model training".into(),
            ));
        }
        tracing::debug!(
            building = selector,
            training_months = series.training.len(),
            history_months = series.history.len(),
            "built monthly series"
        );

        let (method, forecast) = match select_model(&series.training) {
            ModelChoice::ColdStart => {
                tracing::info!(building = selector, "sparse history, using cold-start estimator");
                (
                    ForecastMethod::ColdStart,
                    ColdStartEstimator::forecast(&series.training, horizon),
                )
            }
            ModelChoice::Seasonal => {
                tracing::info!(building = selector, "fitting seasonal log-normal model");
                let model = SeasonalModel::fit(&series.training)?;
                (ForecastMethod::Seasonal, model.forecast(horizon))
            }
        };

        let data = ReconcileService::merge(&series.history, &forecast);
        Ok(ForecastReport { method, data })
    }
}
