//! The process-wide application state: five collections/scalars and the
//! pure in-memory mutations over them. Persistence wraps this from the
//! outside (see [`crate::core::VaultManager`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    player::seed_roster, GeneralExpense, LeagueIncome, MatchDay, Player, SEED_FIELD_FEE,
    SEED_PLAYER_FEE,
};

/// The league treasury state. Collections keep display order: match days,
/// expenses, and incomes are newest-first; the roster is oldest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    pub field_fee: f64,
    pub player_fee: f64,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchDay>,
    #[serde(default)]
    pub expenses: Vec<GeneralExpense>,
    #[serde(default)]
    pub incomes: Vec<LeagueIncome>,
}

impl Default for Vault {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Vault {
    /// A fresh installation: seed roster, seed fees, empty books.
    pub fn seeded() -> Self {
        Self {
            field_fee: SEED_FIELD_FEE,
            player_fee: SEED_PLAYER_FEE,
            players: seed_roster(),
            matches: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
        }
    }

    /// Creates a match day from the roster and fees as they stand right
    /// now and prepends it to the history. Returns the new id.
    pub fn create_match(&mut self, date: NaiveDate, keeper_fee: f64, other_expense: f64) -> Uuid {
        let day = MatchDay::new(
            date,
            self.field_fee,
            keeper_fee,
            other_expense,
            &self.players,
            self.player_fee,
        );
        let id = day.id;
        self.matches.insert(0, day);
        id
    }

    /// Flips one payment's paid flag. Dangling match or player ids make
    /// this a no-op; the return value says whether anything changed.
    pub fn toggle_payment(&mut self, match_id: Uuid, player_id: Uuid) -> bool {
        let Some(day) = self.match_day_mut(match_id) else {
            return false;
        };
        match day.payment_mut(player_id) {
            Some(payment) => {
                payment.is_paid = !payment.is_paid;
                true
            }
            None => false,
        }
    }

    /// Removes a match day entirely. Irreversible.
    pub fn delete_match(&mut self, match_id: Uuid) -> bool {
        let before = self.matches.len();
        self.matches.retain(|day| day.id != match_id);
        self.matches.len() != before
    }

    /// Appends a player unless the trimmed name is empty.
    pub fn add_player(&mut self, name: &str) -> Option<Uuid> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let player = Player::new(trimmed);
        let id = player.id;
        self.players.push(player);
        Some(id)
    }

    /// Removes a player from the roster. Existing match days keep their
    /// payment entries untouched, orphaned or not.
    pub fn remove_player(&mut self, player_id: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|player| player.id != player_id);
        self.players.len() != before
    }

    pub fn add_expense(&mut self, item_name: &str, price: f64, date: NaiveDate) -> Uuid {
        let expense = GeneralExpense::new(item_name, price, date);
        let id = expense.id;
        self.expenses.insert(0, expense);
        id
    }

    pub fn add_income(&mut self, description: &str, amount: f64, date: NaiveDate) -> Uuid {
        let income = LeagueIncome::new(description, amount, date);
        let id = income.id;
        self.incomes.insert(0, income);
        id
    }

    pub fn delete_expense(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        self.expenses.len() != before
    }

    pub fn delete_income(&mut self, id: Uuid) -> bool {
        let before = self.incomes.len();
        self.incomes.retain(|income| income.id != id);
        self.incomes.len() != before
    }

    /// Replaces the configured field fee. Only later match days see it.
    pub fn set_field_fee(&mut self, value: f64) {
        self.field_fee = value;
    }

    /// Replaces the configured per-player fee. Only later match days see it.
    pub fn set_player_fee(&mut self, value: f64) {
        self.player_fee = value;
    }

    pub fn match_day(&self, id: Uuid) -> Option<&MatchDay> {
        self.matches.iter().find(|day| day.id == id)
    }

    fn match_day_mut(&mut self, id: Uuid) -> Option<&mut MatchDay> {
        self.matches.iter_mut().find(|day| day.id == id)
    }

    pub fn player(&self, id: Uuid) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Roster lookup by case-insensitive name; first match wins since
    /// names are not unique.
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.name.eq_ignore_ascii_case(name.trim()))
    }
}
