use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;

use crate::{
    domain::Record,
    errors::StorageError,
    utils::{app_data_dir, ensure_dir},
};

use super::{LedgerStorage, Result};

/// File name of the persisted history inside the app data directory.
pub const LEDGER_FILE_NAME: &str = "storico_finanze.csv";
const TMP_SUFFIX: &str = "tmp";

/// Column layout of the persisted ledger. Header names and order are part of
/// the external contract shared with existing files and exported reports.
pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Importo"];

/// Flat-file CSV backend. One row per record, row order = append order.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend rooted at the default data directory, creating it if needed.
    pub fn new_default() -> Result<Self> {
        let dir = app_data_dir();
        ensure_dir(&dir)?;
        Ok(Self::new(dir.join(LEDGER_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for CsvStorage {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.iter().ne(CSV_HEADER.iter().copied()) {
            return Err(StorageError::CorruptRow {
                row: 0,
                reason: format!(
                    "unexpected header `{}`",
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }
        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<Record>().enumerate() {
            let record = row?;
            if record.amount < Decimal::ZERO {
                return Err(StorageError::CorruptRow {
                    row: index + 1,
                    reason: format!("negative amount {}", record.amount),
                });
            }
            records.push(record);
        }
        tracing::debug!(count = records.len(), "ledger history loaded");
        Ok(records)
    }

    fn append(&self, record: Record) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);
        self.replace_all(&records)
    }

    fn replace_all(&self, records: &[Record]) -> Result<()> {
        let data = encode_records(records)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Serializes records to the wire format, header row included even when the
/// slice is empty.
pub fn encode_records(records: &[Record]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|err| StorageError::Io(err.into_error()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
