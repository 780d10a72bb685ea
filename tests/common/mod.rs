use std::sync::Mutex;

use ledger_core::storage::{csv_backend::LEDGER_FILE_NAME, CsvStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated CSV-backed storage rooted in a unique directory.
pub fn setup_test_storage() -> CsvStorage {
    let temp = TempDir::new().expect("create temp dir");
    let storage = CsvStorage::new(temp.path().join(LEDGER_FILE_NAME));
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    storage
}
