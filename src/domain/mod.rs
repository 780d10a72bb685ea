//! Ledger domain models: records, categories, and reporting periods.

pub mod category;
pub mod period;
pub mod record;

pub use category::{is_default_category, DEFAULT_CATEGORIES};
pub use period::{filter_by_period, ReportPeriod};
pub use record::{Record, RecordKind, DATE_FORMAT};
