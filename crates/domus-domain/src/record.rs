//! Raw ledger rows as returned by the expense store.

use serde::{Deserialize, Serialize};

/// One expense entry for a building: the month it was charged, the amount,
/// and the expense category. Immutable and externally sourced; several
/// records may share a month (one per category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub year: i32,
    pub month: u32,
    pub amount: f64,
    pub category: String,
}

impl ExpenseRecord {
    pub fn new(year: i32, month: u32, amount: f64, category: impl Into<String>) -> Self {
        Self {
            year,
            month,
            amount,
            category: category.into(),
        }
    }
}
