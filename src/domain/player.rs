use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A league member eligible for match-day payments.
///
/// Names are free-form and deliberately not unique; the id is the only
/// stable handle and never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// The roster a fresh installation starts with.
pub fn seed_roster() -> Vec<Player> {
    [
        "Kaptan Ali",
        "Mehmet",
        "Ahmet",
        "Can",
        "Efe",
        "Murat",
        "Burak",
        "Selin",
        "Hakan",
        "Kemal",
        "Yigit",
        "Omer",
    ]
    .into_iter()
    .map(Player::new)
    .collect()
}
