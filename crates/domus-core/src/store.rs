use domus_domain::ExpenseRecord;

use crate::CoreError;

/// Read-only query seam over the external expense ledger.
///
/// The pipeline never writes through this interface; a building unknown to
/// the store yields an empty record set rather than an error.
pub trait ExpenseStore: Send + Sync {
    fn expenses_for_building(&self, building_id: &str) -> Result<Vec<ExpenseRecord>, CoreError>;
}
