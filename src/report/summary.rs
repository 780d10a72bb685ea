use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Record, RecordKind};

/// Totals over a filtered record subset. Amounts accumulate as decimals, so
/// long ledgers do not drift; rounding to two places is a display concern.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_balance: Decimal,
    /// Expense sums keyed by the literal category string. Only categories with
    /// at least one expense record appear; ordering carries no meaning.
    pub expense_by_category: BTreeMap<String, Decimal>,
}

impl ReportTotals {
    pub fn empty() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            net_balance: Decimal::ZERO,
            expense_by_category: BTreeMap::new(),
        }
    }
}

/// Computes income/expense totals and the per-category expense breakdown.
/// Empty input is the normal no-data state: all totals zero, empty map.
pub fn summarize(records: &[Record]) -> ReportTotals {
    let mut totals = ReportTotals::empty();
    for record in records {
        match record.kind {
            RecordKind::Income => totals.total_income += record.amount,
            RecordKind::Expense => {
                totals.total_expense += record.amount;
                *totals
                    .expense_by_category
                    .entry(record.category.clone())
                    .or_insert(Decimal::ZERO) += record.amount;
            }
        }
    }
    totals.net_balance = totals.total_income - totals.total_expense;
    totals
}
