//! The atomic ledger entry and its validation rules.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Wire format for record dates, both on the form boundary and in the file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a ledger entry. The serialized tokens are part of the external
/// file contract and must stay in sync with existing ledger files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    #[serde(rename = "Entrata")]
    Income,
    #[serde(rename = "Uscita")]
    Expense,
}

impl RecordKind {
    pub fn is_income(&self) -> bool {
        matches!(self, RecordKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, RecordKind::Expense)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Income => "Entrata",
            RecordKind::Expense => "Uscita",
        };
        f.write_str(label)
    }
}

/// One immutable ledger entry. Field order and serde renames pin the CSV
/// column layout `Date,Type,Category,Description,Importo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Type")]
    pub kind: RecordKind,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Importo")]
    pub amount: Decimal,
}

impl Record {
    /// Builds a record from already-typed values. The only data-layer rule is
    /// a non-negative amount; direction lives in `kind`, never in the sign.
    /// Category and description are accepted verbatim.
    pub fn new(
        date: NaiveDate,
        kind: RecordKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount(amount));
        }
        Ok(Self {
            date,
            kind,
            category: category.into(),
            description: description.into(),
            amount,
        })
    }

    /// Boundary constructor for raw form input: parses the date and amount
    /// strings, then applies the same rules as [`Record::new`].
    pub fn parse(
        date: &str,
        kind: RecordKind,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: &str,
    ) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;
        Self::new(date, kind, category, description, amount)
    }
}
