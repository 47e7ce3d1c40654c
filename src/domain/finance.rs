use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-off league-wide expense (equipment, jerseys, referee gifts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralExpense {
    pub id: Uuid,
    pub item_name: String,
    pub date: NaiveDate,
    pub price: f64,
}

impl GeneralExpense {
    pub fn new(item_name: impl Into<String>, price: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_name: item_name.into(),
            date,
            price,
        }
    }
}

/// Money entering the vault from outside the weekly collections
/// (sponsors, donations, fines).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueIncome {
    pub id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub amount: f64,
}

impl LeagueIncome {
    pub fn new(description: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            date,
            amount,
        }
    }
}
