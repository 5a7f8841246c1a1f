//! Aliens the player can run into on a planet.

use serde::{Deserialize, Serialize};

/// Highest aggression an alien can have.
pub const MAX_AGGRESSION: u32 = 100;

/// An alien lifeform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alien {
    /// Species or individual name.
    pub name: String,
    /// Raw strength. Adds damage when it wins a fight and boosts loot when it loses.
    pub strength: u32,
    /// Hostility from 0 to 100. Makes it harder to hit and harder to escape.
    pub aggression: u32,
}

impl Alien {
    /// Create an alien, clamping aggression to 0-100.
    pub fn new(name: impl Into<String>, strength: u32, aggression: u32) -> Self {
        Self {
            name: name.into(),
            strength,
            aggression: aggression.min(MAX_AGGRESSION),
        }
    }
}

impl std::fmt::Display for Alien {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Strength: {}, Aggression: {})",
            self.name, self.strength, self.aggression
        )
    }
}
