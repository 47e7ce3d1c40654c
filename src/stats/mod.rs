//! Pure aggregation over the vault collections. Everything here is a
//! full recompute on every call; nothing is cached or persisted.

use crate::domain::{GeneralExpense, LeagueIncome, MatchDay};

/// League-wide financial totals derived from the live collections.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialStats {
    pub total_collected_from_players: f64,
    pub total_extra_income: f64,
    pub total_weekly_expenses: f64,
    pub total_league_expenses: f64,
    pub vault_balance: f64,
    pub match_count: usize,
}

impl FinancialStats {
    /// Single linear pass over each collection.
    pub fn compute(
        matches: &[MatchDay],
        expenses: &[GeneralExpense],
        incomes: &[LeagueIncome],
    ) -> Self {
        let mut total_collected_from_players = 0.0;
        let mut total_weekly_expenses = 0.0;
        for day in matches {
            total_collected_from_players += day.collected();
            total_weekly_expenses += day.total_cost();
        }

        let total_league_expenses: f64 = expenses.iter().map(|expense| expense.price).sum();
        let total_extra_income: f64 = incomes.iter().map(|income| income.amount).sum();

        Self {
            total_collected_from_players,
            total_extra_income,
            total_weekly_expenses,
            total_league_expenses,
            vault_balance: (total_collected_from_players + total_extra_income)
                - (total_weekly_expenses + total_league_expenses),
            match_count: matches.len(),
        }
    }
}

/// Display figures for a single match day.
///
/// `player_income` multiplies the paid headcount by the CURRENT
/// configured player fee, not the amounts stored on the payments, so it
/// drifts from the dashboard totals if the fee changed after the match
/// was created. The caller passes the fee explicitly to keep that choice
/// visible.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBreakdown {
    pub paid_count: usize,
    pub player_income: f64,
    pub total_cost: f64,
    pub balance: f64,
    pub field_fee_coverage: f64,
}

impl MatchBreakdown {
    pub fn for_match(day: &MatchDay, current_player_fee: f64) -> Self {
        let paid_count = day.payments.iter().filter(|p| p.is_paid).count();
        let player_income = paid_count as f64 * current_player_fee;
        let total_cost = day.total_cost();
        let coverage = if day.field_fee > 0.0 {
            (player_income / day.field_fee).min(1.0)
        } else {
            1.0
        };
        Self {
            paid_count,
            player_income,
            total_cost,
            balance: player_income - total_cost,
            field_fee_coverage: coverage,
        }
    }
}
