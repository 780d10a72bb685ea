use chrono::NaiveDate;

use crate::domain::{filter_by_period, ReportPeriod};
use crate::errors::Result;
use crate::report::{export, summarize, FinanceReport, ReportExport};
use crate::storage::LedgerStorage;

pub struct ReportService;

impl ReportService {
    /// Runs the full load → filter → aggregate pipeline for one period.
    /// Self-contained and idempotent given the same storage contents.
    pub fn get_report(
        storage: &dyn LedgerStorage,
        period: ReportPeriod,
        reference: NaiveDate,
    ) -> Result<FinanceReport> {
        let history = storage.load()?;
        let records = filter_by_period(&history, period, reference);
        let totals = summarize(&records);
        Ok(FinanceReport {
            period,
            totals,
            records,
        })
    }

    /// Serializes the filtered subset for download without touching the store.
    pub fn export_report(
        storage: &dyn LedgerStorage,
        period: ReportPeriod,
        reference: NaiveDate,
    ) -> Result<ReportExport> {
        let report = Self::get_report(storage, period, reference)?;
        Ok(export::export_report(&report.records, period)?)
    }
}
