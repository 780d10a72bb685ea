use crate::domain::{Record, ReportPeriod};
use crate::errors::StorageError;
use crate::storage::csv_backend::encode_records;

/// A one-shot downloadable report: CSV bytes plus a suggested file name.
#[derive(Debug, Clone)]
pub struct ReportExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Suggested download name for a filtered report, e.g. `report_current_month.csv`.
pub fn export_file_name(period: ReportPeriod) -> String {
    format!("report_{}.csv", period.slug())
}

/// Serializes a filtered subset with the same tabular encoding the ledger
/// store persists. Pure function of its input; the stored ledger is untouched.
/// An empty subset still yields the header row.
pub fn export_report(
    records: &[Record],
    period: ReportPeriod,
) -> Result<ReportExport, StorageError> {
    Ok(ReportExport {
        file_name: export_file_name(period),
        bytes: encode_records(records)?,
    })
}
