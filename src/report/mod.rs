//! Period reports: aggregation over a filtered record subset and CSV export.

pub mod export;
pub mod summary;

use serde::Serialize;

use crate::domain::{Record, ReportPeriod};

pub use export::{export_report, ReportExport};
pub use summary::{summarize, ReportTotals};

/// Everything a front end needs to render one period report.
#[derive(Debug, Clone, Serialize)]
pub struct FinanceReport {
    pub period: ReportPeriod,
    pub totals: ReportTotals,
    pub records: Vec<Record>,
}
