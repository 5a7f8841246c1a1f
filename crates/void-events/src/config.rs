//! Configuration for a voyage and the encounter balance numbers.

use serde::{Deserialize, Serialize};

use crate::error::EventResult;

/// Balance numbers for the alien encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterTuning {
    /// Attack success chance before the aggression penalty.
    pub attack_base_chance: u32,
    /// Fixed hull damage when an attack or an escape fails.
    pub damage_base: u32,
    /// Random damage on top of `damage_base`, inclusive.
    pub damage_range: u32,
    /// Fixed hull damage taken while escaping.
    pub flee_damage_base: u32,
    /// Random escape damage on top of `flee_damage_base`, inclusive.
    pub flee_damage_range: u32,
    /// Flee success chance before the aggression penalty.
    pub flee_base_chance: u32,
    /// Aggression above which a successful escape costs extra hull.
    pub panic_threshold: u32,
    /// Upper bound of the extra escape damage, inclusive.
    pub panic_range: u32,
}

impl Default for EncounterTuning {
    fn default() -> Self {
        Self {
            attack_base_chance: 60,
            damage_base: 15,
            damage_range: 10,
            flee_damage_base: 5,
            flee_damage_range: 5,
            flee_base_chance: 85,
            panic_threshold: 75,
            panic_range: 4,
        }
    }
}

/// Configuration for a voyage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoyageConfig {
    /// RNG seed for reproducible encounters.
    pub seed: u64,
    /// Hull integrity at launch.
    pub starting_health: i32,
    /// Fuel at launch.
    pub starting_fuel: i32,
    /// Encounter balance.
    pub tuning: EncounterTuning,
}

impl Default for VoyageConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_health: 100,
            starting_fuel: 100,
            tuning: EncounterTuning::default(),
        }
    }
}

impl VoyageConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> EventResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set starting hull integrity (at least 1).
    pub fn with_health(mut self, health: i32) -> Self {
        self.starting_health = health.max(1);
        self
    }

    /// Set starting fuel (at least 0).
    pub fn with_fuel(mut self, fuel: i32) -> Self {
        self.starting_fuel = fuel.max(0);
        self
    }

    /// Replace the encounter balance.
    pub fn with_tuning(mut self, tuning: EncounterTuning) -> Self {
        self.tuning = tuning;
        self
    }
}
