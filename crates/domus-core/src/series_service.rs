//! Builds the filtered training series and the unfiltered history series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use domus_domain::{month_start, truncate_to_month, ExpenseRecord, MonthPoint, SeriesPair};

use crate::CoreError;

/// Amount at or above which a record is treated as one-off capital spend
/// rather than a recurring cost.
pub const CAPITAL_SPEND_THRESHOLD: f64 = 2000.0;

/// Category excluded from model training (capital repairs).
pub const REPAIR_CATEGORY: &str = "repair";

pub struct SeriesService;

impl SeriesService {
    /// Builds both monthly series in one pass over the raw records.
    ///
    /// Records dated after the current month are dropped; amounts sharing a
    /// month are summed. Fails with [`CoreError::NoData`] on an empty record
    /// set and [`CoreError::NoHistory`] when nothing remains after
    /// truncation.
    pub fn build(records: &[ExpenseRecord], today: NaiveDate) -> Result<SeriesPair, CoreError> {
        if records.is_empty() {
            return Err(CoreError::NoData);
        }

        let current_month = truncate_to_month(today);
        let mut history: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut training: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut invalid = 0usize;

        for record in records {
            let Some(date) = month_start(record.year, record.month) else {
                invalid += 1;
                continue;
            };
            if date > current_month {
                continue;
            }
            *history.entry(date).or_insert(0.0) += record.amount;
            if Self::trains_model(record) {
                *training.entry(date).or_insert(0.0) += record.amount;
            }
        }

        if invalid > 0 {
            tracing::warn!(invalid, "dropped records with out-of-range month numbers");
        }
        if history.is_empty() {
            return Err(CoreError::NoHistory(
                "every record is dated in the future".into(),
            ));
        }

        Ok(SeriesPair {
            training: into_points(training),
            history: into_points(history),
        })
    }

    /// Single predicate deciding whether a record may influence the model.
    ///
    /// Capital-sized amounts and repair entries would bias a recurring-cost
    /// model; they stay visible in the history series only.
    pub fn trains_model(record: &ExpenseRecord) -> bool {
        record.amount < CAPITAL_SPEND_THRESHOLD && record.category != REPAIR_CATEGORY
    }
}

fn into_points(months: BTreeMap<NaiveDate, f64>) -> Vec<MonthPoint> {
    months
        .into_iter()
        .map(|(date, value)| MonthPoint::new(date, value))
        .collect()
}
