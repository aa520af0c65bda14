//! Aggregated monthly series derived from raw expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One aggregated month of expenses. `date` is always the first of the
/// month; a series never holds two points for the same month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    #[serde(with = "crate::month::month_format")]
    pub date: NaiveDate,
    pub value: f64,
}

impl MonthPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// The two parallel monthly series built in one pass over the records.
///
/// `training` excludes capital-sized amounts and repair entries and is the
/// only series models may fit on. `history` keeps every record and is used
/// solely for displaying actuals. Both are sorted ascending by date.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesPair {
    pub training: Vec<MonthPoint>,
    pub history: Vec<MonthPoint>,
}
