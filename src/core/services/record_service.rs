use crate::domain::{Record, RecordKind};
use crate::errors::Result;
use crate::storage::LedgerStorage;

pub struct RecordService;

impl RecordService {
    /// Validates raw form input and appends the record to durable storage.
    /// A validation failure aborts before anything is written.
    pub fn submit_record(
        storage: &dyn LedgerStorage,
        date: &str,
        kind: RecordKind,
        category: &str,
        description: &str,
        amount: &str,
    ) -> Result<Record> {
        let record = Record::parse(date, kind, category, description, amount)?;
        storage.append(record.clone())?;
        tracing::info!(date = %record.date, kind = %record.kind, "record appended");
        Ok(record)
    }

    /// Appends an already-validated record.
    pub fn submit(storage: &dyn LedgerStorage, record: Record) -> Result<()> {
        storage.append(record)?;
        Ok(())
    }
}
