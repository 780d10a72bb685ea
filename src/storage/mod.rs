pub mod csv_backend;

use crate::domain::Record;
use crate::errors::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over persistence backends for the append-only record history.
///
/// `append` is a read-modify-write over the whole history with no concurrency
/// guard: the design assumes cooperative single-writer usage, and concurrent
/// writers lose updates (last write wins). That is an accepted limitation of
/// this core, not something the backend masks.
pub trait LedgerStorage: Send + Sync {
    /// Full ordered history. No persisted state yet is the empty initial
    /// state, not an error; corrupt state is a hard error.
    fn load(&self) -> Result<Vec<Record>>;

    /// Loads the current history, appends `record`, and rewrites everything.
    fn append(&self, record: Record) -> Result<()>;

    /// Rewrites the whole history. A failed write must leave the previously
    /// persisted state intact.
    fn replace_all(&self, records: &[Record]) -> Result<()>;
}

pub use csv_backend::CsvStorage;
