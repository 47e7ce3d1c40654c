use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;

use super::{StorageBackend, StoreKey};

const DEFAULT_DIR_NAME: &str = ".league_vault";
const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application data directory, defaulting to `~/.league_vault`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LEAGUE_VAULT_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-per-key JSON storage under a single data directory.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: StoreKey) -> PathBuf {
        self.root
            .join(format!("{}.{}", key.as_str(), STORE_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn read_key(&self, key: StoreKey) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_key(&self, key: StoreKey, json: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_or_seed, persist};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn write_then_read_roundtrips() {
        let (storage, _guard) = storage_with_temp_dir();
        persist(&storage, StoreKey::FieldFee, &2800.0).expect("persist fee");
        let value: f64 = load_or_seed(&storage, StoreKey::FieldFee, 0.0);
        assert_eq!(value, 2800.0);
    }

    #[test]
    fn missing_key_falls_back_to_seed() {
        let (storage, _guard) = storage_with_temp_dir();
        let value: f64 = load_or_seed(&storage, StoreKey::PlayerFee, 225.0);
        assert_eq!(value, 225.0);
    }

    #[test]
    fn malformed_key_falls_back_to_seed() {
        let (storage, _guard) = storage_with_temp_dir();
        storage
            .write_key(StoreKey::Matches, "this is not json")
            .expect("raw write");
        let value: Vec<crate::domain::MatchDay> =
            load_or_seed(&storage, StoreKey::Matches, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn writes_replace_rather_than_append() {
        let (storage, _guard) = storage_with_temp_dir();
        persist(&storage, StoreKey::FieldFee, &100.0).unwrap();
        persist(&storage, StoreKey::FieldFee, &200.0).unwrap();
        let value: f64 = load_or_seed(&storage, StoreKey::FieldFee, 0.0);
        assert_eq!(value, 200.0);
    }
}
