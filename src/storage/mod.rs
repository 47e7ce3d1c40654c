pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

/// The stable persisted keys. One JSON document per key; absence of a
/// key means "use the seed value", never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    FieldFee,
    PlayerFee,
    Players,
    Matches,
    LeagueExpenses,
    LeagueIncomes,
}

impl StoreKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::FieldFee => "config_field_fee",
            StoreKey::PlayerFee => "config_player_fee",
            StoreKey::Players => "players",
            StoreKey::Matches => "matches",
            StoreKey::LeagueExpenses => "league_expenses",
            StoreKey::LeagueIncomes => "league_incomes",
        }
    }
}

/// Abstraction over persistence backends holding one JSON value per key.
pub trait StorageBackend: Send + Sync {
    /// Raw JSON for a key, or `None` when the key has never been written.
    fn read_key(&self, key: StoreKey) -> Result<Option<String>>;

    /// Writes the raw JSON for a key, replacing any previous value.
    fn write_key(&self, key: StoreKey, json: &str) -> Result<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<S> {
    fn read_key(&self, key: StoreKey) -> Result<Option<String>> {
        (**self).read_key(key)
    }

    fn write_key(&self, key: StoreKey, json: &str) -> Result<()> {
        (**self).write_key(key, json)
    }
}

/// Loads a key, substituting `seed` when the key is absent or fails to
/// parse. Corruption is logged and otherwise treated as missing.
pub fn load_or_seed<T, B>(backend: &B, key: StoreKey, seed: T) -> T
where
    T: DeserializeOwned,
    B: StorageBackend + ?Sized,
{
    let raw = match backend.read_key(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return seed,
        Err(err) => {
            tracing::warn!(key = key.as_str(), %err, "unreadable persisted key, using seed value");
            return seed;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key = key.as_str(), %err, "malformed persisted key, using seed value");
            seed
        }
    }
}

/// Serializes and writes one key. The write completes before the caller's
/// mutation is considered done.
pub fn persist<T, B>(backend: &B, key: StoreKey, value: &T) -> Result<()>
where
    T: Serialize,
    B: StorageBackend + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    backend.write_key(key, &json)
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
