//! domus-domain
//!
//! Pure data types for the expense forecasting pipeline (ledger records,
//! monthly series, forecast output). No I/O, no storage, no model code.

pub mod forecast;
pub mod month;
pub mod record;
pub mod series;

pub use forecast::*;
pub use month::{add_months, month_start, truncate_to_month};
pub use record::*;
pub use series::*;
