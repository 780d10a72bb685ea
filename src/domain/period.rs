//! Calendar-period selection of ledger records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Reporting window relative to a reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportPeriod {
    CurrentMonth,
    CurrentYear,
}

impl ReportPeriod {
    /// Whether `date` falls in the same calendar month/year as `reference`.
    pub fn contains(&self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            ReportPeriod::CurrentMonth => {
                date.year() == reference.year() && date.month() == reference.month()
            }
            ReportPeriod::CurrentYear => date.year() == reference.year(),
        }
    }

    /// File-name fragment used by the report exporter.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportPeriod::CurrentMonth => "current_month",
            ReportPeriod::CurrentYear => "current_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::CurrentMonth => "Current month",
            ReportPeriod::CurrentYear => "Current year",
        }
    }
}

/// Returns the records inside `period`, preserving relative order.
/// Pure: the input is never mutated; no matches means an empty vec.
pub fn filter_by_period(
    records: &[Record],
    period: ReportPeriod,
    reference: NaiveDate,
) -> Vec<Record> {
    records
        .iter()
        .filter(|record| period.contains(record.date, reference))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordKind;
    use rust_decimal_macros::dec;

    fn record_on(date: NaiveDate) -> Record {
        Record::new(date, RecordKind::Expense, "Casa", "", dec!(1.00)).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn current_month_requires_year_and_month_match() {
        let reference = date(2024, 3, 15);
        assert!(ReportPeriod::CurrentMonth.contains(date(2024, 3, 1), reference));
        assert!(!ReportPeriod::CurrentMonth.contains(date(2024, 2, 29), reference));
        // Same month number in another year is a different period.
        assert!(!ReportPeriod::CurrentMonth.contains(date(2023, 3, 1), reference));
    }

    #[test]
    fn current_year_requires_year_match_only() {
        let reference = date(2024, 3, 15);
        assert!(ReportPeriod::CurrentYear.contains(date(2024, 12, 31), reference));
        assert!(!ReportPeriod::CurrentYear.contains(date(2023, 12, 31), reference));
    }

    #[test]
    fn filter_preserves_append_order() {
        let records = vec![
            record_on(date(2024, 3, 20)),
            record_on(date(2023, 3, 20)),
            record_on(date(2024, 3, 5)),
        ];
        let filtered = filter_by_period(&records, ReportPeriod::CurrentMonth, date(2024, 3, 15));
        let days: Vec<u32> = filtered.iter().map(|r| r.date.day()).collect();
        assert_eq!(days, vec![20, 5]);
    }

    #[test]
    fn month_filter_is_subset_of_year_filter() {
        let reference = date(2024, 6, 10);
        let records = vec![
            record_on(date(2024, 6, 1)),
            record_on(date(2024, 1, 1)),
            record_on(date(2023, 6, 1)),
        ];
        let monthly = filter_by_period(&records, ReportPeriod::CurrentMonth, reference);
        let yearly = filter_by_period(&records, ReportPeriod::CurrentYear, reference);
        assert!(monthly.iter().all(|record| yearly.contains(record)));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filtered = filter_by_period(&[], ReportPeriod::CurrentYear, date(2024, 1, 1));
        assert!(filtered.is_empty());
    }
}
