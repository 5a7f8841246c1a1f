//! Player state and the mutation contract used by encounters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default ceiling for every player stat.
pub const DEFAULT_MAX_STAT: i32 = 100;

/// A numeric player stat that events can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    /// Hull integrity. The ship is lost at zero.
    Health,
    /// Fuel reserve for jumps between systems.
    Fuel,
}

impl StatKind {
    /// Parse a stat from a user-supplied string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "health" | "hull" | "hp" => Ok(Self::Health),
            "fuel" => Ok(Self::Fuel),
            other => Err(CoreError::UnknownStat(other.to_string())),
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Health => write!(f, "Health"),
            Self::Fuel => write!(f, "Fuel"),
        }
    }
}

/// Write-only view of the player used by event outcomes.
///
/// Outcomes only push changes through this trait and never read state back,
/// so any host-side player representation can sit behind it.
pub trait PlayerMutator {
    /// Apply a signed change to a stat.
    fn update_stat(&mut self, stat: StatKind, delta: i32);

    /// Add `amount` units of `name` to the inventory.
    fn add_item_to_inventory(&mut self, name: &str, amount: u32);
}

/// The player's ship: stats plus a cargo hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    health: i32,
    fuel: i32,
    max_health: i32,
    max_fuel: i32,
    inventory: BTreeMap<String, u32>,
}

impl Player {
    /// Create a player with the given starting stats. Maxima are the
    /// larger of the starting value and [`DEFAULT_MAX_STAT`].
    pub fn new(health: i32, fuel: i32) -> Self {
        let max_health = health.max(DEFAULT_MAX_STAT);
        let max_fuel = fuel.max(DEFAULT_MAX_STAT);
        Self {
            health: health.clamp(0, max_health),
            fuel: fuel.clamp(0, max_fuel),
            max_health,
            max_fuel,
            inventory: BTreeMap::new(),
        }
    }

    /// Current hull integrity.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current fuel reserve.
    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    /// Current value of a stat.
    pub fn stat(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Health => self.health,
            StatKind::Fuel => self.fuel,
        }
    }

    /// Upper bound of a stat.
    pub fn max_stat(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Health => self.max_health,
            StatKind::Fuel => self.max_fuel,
        }
    }

    /// The cargo hold, keyed by item name.
    pub fn inventory(&self) -> &BTreeMap<String, u32> {
        &self.inventory
    }

    /// Units of an item held, or 0.
    pub fn item_count(&self, name: &str) -> u32 {
        self.inventory.get(name).copied().unwrap_or(0)
    }

    /// Whether the hull is still intact.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STAT, DEFAULT_MAX_STAT)
    }
}

impl PlayerMutator for Player {
    fn update_stat(&mut self, stat: StatKind, delta: i32) {
        let max = self.max_stat(stat);
        let slot = match stat {
            StatKind::Health => &mut self.health,
            StatKind::Fuel => &mut self.fuel,
        };
        *slot = slot.saturating_add(delta).clamp(0, max);
    }

    fn add_item_to_inventory(&mut self, name: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        let held = self.inventory.entry(name.to_string()).or_insert(0);
        *held = held.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_player() {
        let p = Player::default();
        assert_eq!(p.health(), 100);
        assert_eq!(p.fuel(), 100);
        assert!(p.inventory().is_empty());
        assert!(p.is_alive());
    }

    #[test]
    fn update_stat_clamps_to_bounds() {
        let mut p = Player::new(50, 20);
        p.update_stat(StatKind::Health, -70);
        assert_eq!(p.health(), 0);
        assert!(!p.is_alive());

        p.update_stat(StatKind::Fuel, 500);
        assert_eq!(p.fuel(), 100);
    }

    #[test]
    fn update_stat_moves_only_target() {
        let mut p = Player::new(80, 60);
        p.update_stat(StatKind::Fuel, -5);
        assert_eq!(p.fuel(), 55);
        assert_eq!(p.health(), 80);
        assert_eq!(p.stat(StatKind::Fuel), 55);
    }

    #[test]
    fn starting_above_default_raises_max() {
        let p = Player::new(150, 10);
        assert_eq!(p.max_stat(StatKind::Health), 150);
        assert_eq!(p.max_stat(StatKind::Fuel), 100);
    }

    #[test]
    fn inventory_accumulates() {
        let mut p = Player::default();
        p.add_item_to_inventory("Common Fuel", 12);
        p.add_item_to_inventory("Common Fuel", 3);
        p.add_item_to_inventory("Rare Tech", 1);
        assert_eq!(p.item_count("Common Fuel"), 15);
        assert_eq!(p.item_count("Rare Tech"), 1);
        assert_eq!(p.item_count("Biomass"), 0);
    }

    #[test]
    fn zero_amount_is_not_stored() {
        let mut p = Player::default();
        p.add_item_to_inventory("Dust", 0);
        assert!(p.inventory().is_empty());
    }

    #[test]
    fn stat_parse() {
        assert_eq!(StatKind::parse("health").unwrap(), StatKind::Health);
        assert_eq!(StatKind::parse(" HULL ").unwrap(), StatKind::Health);
        assert_eq!(StatKind::parse("fuel").unwrap(), StatKind::Fuel);
        assert!(StatKind::parse("oxygen").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let mut p = Player::new(70, 40);
        p.add_item_to_inventory("Biomass", 4);
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
