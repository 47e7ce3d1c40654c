//! The mutation surface: every operation edits the in-memory [`Vault`]
//! and then write-through persists the touched collection before
//! returning. There is exactly one writer; no batching, no write-behind.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{player::seed_roster, SEED_FIELD_FEE, SEED_PLAYER_FEE};
use crate::errors::Result;
use crate::storage::{load_or_seed, persist, StorageBackend, StoreKey};
use crate::vault::Vault;

pub struct VaultManager {
    vault: Vault,
    storage: Box<dyn StorageBackend>,
}

impl VaultManager {
    /// Loads every persisted key, substituting its seed value when the
    /// key is absent or unreadable. Never fails: a blank or corrupted
    /// data directory simply yields a freshly seeded vault.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let vault = Vault {
            field_fee: load_or_seed(storage.as_ref(), StoreKey::FieldFee, SEED_FIELD_FEE),
            player_fee: load_or_seed(storage.as_ref(), StoreKey::PlayerFee, SEED_PLAYER_FEE),
            players: load_or_seed(storage.as_ref(), StoreKey::Players, seed_roster()),
            matches: load_or_seed(storage.as_ref(), StoreKey::Matches, Vec::new()),
            expenses: load_or_seed(storage.as_ref(), StoreKey::LeagueExpenses, Vec::new()),
            incomes: load_or_seed(storage.as_ref(), StoreKey::LeagueIncomes, Vec::new()),
        };
        tracing::debug!(
            players = vault.players.len(),
            matches = vault.matches.len(),
            "vault state loaded"
        );
        Self { vault, storage }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    pub fn create_match(
        &mut self,
        date: NaiveDate,
        keeper_fee: f64,
        other_expense: f64,
    ) -> Result<Uuid> {
        let id = self.vault.create_match(date, keeper_fee, other_expense);
        self.persist_matches()?;
        Ok(id)
    }

    /// Returns `false` (and persists nothing) when either id is dangling.
    pub fn toggle_payment(&mut self, match_id: Uuid, player_id: Uuid) -> Result<bool> {
        if !self.vault.toggle_payment(match_id, player_id) {
            return Ok(false);
        }
        self.persist_matches()?;
        Ok(true)
    }

    pub fn delete_match(&mut self, match_id: Uuid) -> Result<bool> {
        if !self.vault.delete_match(match_id) {
            return Ok(false);
        }
        self.persist_matches()?;
        Ok(true)
    }

    /// `None` when the trimmed name is empty; nothing is persisted then.
    pub fn add_player(&mut self, name: &str) -> Result<Option<Uuid>> {
        let Some(id) = self.vault.add_player(name) else {
            return Ok(None);
        };
        self.persist_players()?;
        Ok(Some(id))
    }

    pub fn remove_player(&mut self, player_id: Uuid) -> Result<bool> {
        if !self.vault.remove_player(player_id) {
            return Ok(false);
        }
        self.persist_players()?;
        Ok(true)
    }

    pub fn add_expense(&mut self, item_name: &str, price: f64, date: NaiveDate) -> Result<Uuid> {
        let id = self.vault.add_expense(item_name, price, date);
        self.persist_expenses()?;
        Ok(id)
    }

    pub fn add_income(&mut self, description: &str, amount: f64, date: NaiveDate) -> Result<Uuid> {
        let id = self.vault.add_income(description, amount, date);
        self.persist_incomes()?;
        Ok(id)
    }

    pub fn delete_expense(&mut self, id: Uuid) -> Result<bool> {
        if !self.vault.delete_expense(id) {
            return Ok(false);
        }
        self.persist_expenses()?;
        Ok(true)
    }

    pub fn delete_income(&mut self, id: Uuid) -> Result<bool> {
        if !self.vault.delete_income(id) {
            return Ok(false);
        }
        self.persist_incomes()?;
        Ok(true)
    }

    pub fn set_field_fee(&mut self, value: f64) -> Result<()> {
        self.vault.set_field_fee(value);
        persist(self.storage.as_ref(), StoreKey::FieldFee, &self.vault.field_fee)
    }

    pub fn set_player_fee(&mut self, value: f64) -> Result<()> {
        self.vault.set_player_fee(value);
        persist(
            self.storage.as_ref(),
            StoreKey::PlayerFee,
            &self.vault.player_fee,
        )
    }

    fn persist_matches(&self) -> Result<()> {
        persist(self.storage.as_ref(), StoreKey::Matches, &self.vault.matches)
    }

    fn persist_players(&self) -> Result<()> {
        persist(self.storage.as_ref(), StoreKey::Players, &self.vault.players)
    }

    fn persist_expenses(&self) -> Result<()> {
        persist(
            self.storage.as_ref(),
            StoreKey::LeagueExpenses,
            &self.vault.expenses,
        )
    }

    fn persist_incomes(&self) -> Result<()> {
        persist(
            self.storage.as_ref(),
            StoreKey::LeagueIncomes,
            &self.vault.incomes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
    }

    fn open_in_memory() -> VaultManager {
        VaultManager::open(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn open_on_empty_storage_yields_seed_state() {
        let manager = open_in_memory();
        assert_eq!(manager.vault().field_fee, SEED_FIELD_FEE);
        assert_eq!(manager.vault().player_fee, SEED_PLAYER_FEE);
        assert_eq!(manager.vault().players.len(), 12);
        assert!(manager.vault().matches.is_empty());
    }

    #[test]
    fn mutations_write_through_the_touched_collection() {
        let storage = std::sync::Arc::new(MemoryStorage::new());
        let mut manager = VaultManager::open(Box::new(storage.clone()));
        assert!(storage.raw(StoreKey::Matches).is_none());

        manager.create_match(date(), 200.0, 0.0).unwrap();
        assert!(storage.raw(StoreKey::Matches).is_some());
        // Only the touched collection is rewritten.
        assert!(storage.raw(StoreKey::Players).is_none());

        manager.add_player("Deniz").unwrap();
        assert!(storage.raw(StoreKey::Players).is_some());
    }

    #[test]
    fn blank_player_name_is_not_persisted() {
        let mut manager = open_in_memory();
        assert!(manager.add_player("  ").unwrap().is_none());
        assert_eq!(manager.vault().players.len(), 12);
    }

    #[test]
    fn dangling_toggle_reports_false() {
        let mut manager = open_in_memory();
        let match_id = manager.create_match(date(), 0.0, 0.0).unwrap();
        assert!(!manager.toggle_payment(match_id, Uuid::new_v4()).unwrap());
        assert!(!manager.toggle_payment(Uuid::new_v4(), Uuid::new_v4()).unwrap());
    }
}
