use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::Result;

use super::{StorageBackend, StoreKey};

/// In-memory backend with the same semantics as [`super::JsonStorage`].
/// Tests inject it to exercise the write-through path without a disk.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, bypassing the typed layer. Lets tests stage
    /// malformed documents.
    pub fn seed_raw(&self, key: StoreKey, json: impl Into<String>) {
        self.lock().insert(key.as_str(), json.into());
    }

    /// Raw stored bytes for a key, if any. Lets tests assert exactly what
    /// was (or was not) written through.
    pub fn raw(&self, key: StoreKey) -> Option<String> {
        self.lock().get(key.as_str()).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, String>> {
        self.entries.lock().expect("MemoryStorage lock poisoned")
    }
}

impl StorageBackend for MemoryStorage {
    fn read_key(&self, key: StoreKey) -> Result<Option<String>> {
        Ok(self.lock().get(key.as_str()).cloned())
    }

    fn write_key(&self, key: StoreKey, json: &str) -> Result<()> {
        self.lock().insert(key.as_str(), json.to_string());
        Ok(())
    }
}
