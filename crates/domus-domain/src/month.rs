//! First-of-month date helpers shared across the forecasting pipeline.
//!
//! Every series key in domus is the first day of a month; these helpers keep
//! that invariant in one place.

use chrono::{Datelike, NaiveDate};

/// Builds the first-of-month stamp for a (year, month) pair.
///
/// Returns `None` when the month falls outside `1..=12`.
pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Truncates any date to the first day of its month.
pub fn truncate_to_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Steps a first-of-month date by `months` (negative steps move backwards).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).unwrap()
}

/// Serde adapter rendering month keys as zero-padded `"YYYY-MM"` strings.
pub mod month_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
            .map_err(serde::de::Error::custom)
    }
}
