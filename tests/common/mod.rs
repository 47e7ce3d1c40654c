use std::path::PathBuf;
use std::sync::Mutex;

use league_vault::{core::VaultManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique data directory.
pub fn setup_manager() -> (VaultManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    (VaultManager::open(Box::new(storage)), base)
}

/// Reopens a manager over an existing data directory.
pub fn reopen_manager(base: &PathBuf) -> VaultManager {
    let storage = JsonStorage::new(Some(base.clone())).expect("reopen json storage backend");
    VaultManager::open(Box::new(storage))
}
