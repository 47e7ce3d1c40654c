use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::player::Player;

/// One player's slot in a match day's collection sheet.
///
/// `player_id` is a lookup key into the roster, not ownership: a player
/// removed from the roster later leaves this entry behind, dangling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub player_id: Uuid,
    pub amount: f64,
    pub is_paid: bool,
}

/// A weekly match session with its costs and collection sheet.
///
/// `field_fee` and every payment `amount` are snapshots of the configured
/// fees at creation time; changing the configuration afterwards never
/// rewrites an existing match day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDay {
    pub id: Uuid,
    pub date: NaiveDate,
    pub field_fee: f64,
    pub keeper_fee: f64,
    pub other_expense: f64,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl MatchDay {
    /// Builds a match day from the roster as it stands right now: one
    /// unpaid payment per current player, at the current player fee.
    pub fn new(
        date: NaiveDate,
        field_fee: f64,
        keeper_fee: f64,
        other_expense: f64,
        roster: &[Player],
        player_fee: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            field_fee,
            keeper_fee,
            other_expense,
            payments: roster
                .iter()
                .map(|player| Payment {
                    player_id: player.id,
                    amount: player_fee,
                    is_paid: false,
                })
                .collect(),
        }
    }

    /// Field, keeper, and incidental costs for this session combined.
    pub fn total_cost(&self) -> f64 {
        self.field_fee + self.keeper_fee + self.other_expense
    }

    /// Sum of the amounts actually collected so far.
    pub fn collected(&self) -> f64 {
        self.payments
            .iter()
            .filter(|payment| payment.is_paid)
            .map(|payment| payment.amount)
            .sum()
    }

    pub fn payment(&self, player_id: Uuid) -> Option<&Payment> {
        self.payments
            .iter()
            .find(|payment| payment.player_id == player_id)
    }

    pub(crate) fn payment_mut(&mut self, player_id: Uuid) -> Option<&mut Payment> {
        self.payments
            .iter_mut()
            .find(|payment| payment.player_id == player_id)
    }
}
