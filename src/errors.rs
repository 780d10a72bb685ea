use std::result::Result as StdResult;

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection of raw user input before anything touches the ledger file.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid amount `{0}`, expected a decimal number")]
    InvalidAmount(String),
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
}

/// Failure of the persisted ledger medium. Corrupt data is a hard error:
/// dropping rows would corrupt every total computed afterwards.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed ledger data: {0}")]
    Malformed(#[from] csv::Error),
    #[error("corrupt ledger row {row}: {reason}")]
    CorruptRow { row: usize, reason: String },
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = StdResult<T, LedgerError>;
