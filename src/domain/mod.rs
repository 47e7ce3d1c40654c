pub mod finance;
pub mod match_day;
pub mod player;

pub use finance::{GeneralExpense, LeagueIncome};
pub use match_day::{MatchDay, Payment};
pub use player::Player;

/// Field fee applied to a match day when no persisted value exists yet.
pub const SEED_FIELD_FEE: f64 = 2800.0;

/// Per-player fee applied to new payments when no persisted value exists yet.
pub const SEED_PLAYER_FEE: f64 = 225.0;
