//! Planets: loot sources with a type, size, and tier.
//!
//! A planet's type picks the base resource it yields, its tier gates which
//! rarity bands can drop, and its size scales the quantities.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Resource name used for planet types without an entry in [`RESOURCE_TABLE`].
pub const UNKNOWN_RESOURCE: &str = "Exotic Matter";

/// Largest size a generated planet can have.
pub const MAX_GENERATED_SIZE: u32 = 99;

/// What a planet is mostly made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    /// Gas giant.
    Gas,
    /// Rocky, ore-bearing world.
    Mineral,
    /// World with a biosphere.
    Organic,
    /// A star. Never produced by the generator.
    Star,
    /// A scripted event location. Never produced by the generator.
    Event,
}

/// Static mapping from planet type to the base resource it yields.
pub const RESOURCE_TABLE: &[(PlanetType, &str)] = &[
    (PlanetType::Gas, "Fuel"),
    (PlanetType::Mineral, "Building Materials"),
    (PlanetType::Organic, "Biomass"),
];

/// Types the procedural generator picks from, uniformly.
const GENERATED_TYPES: [PlanetType; 3] =
    [PlanetType::Gas, PlanetType::Mineral, PlanetType::Organic];

impl PlanetType {
    /// Base resource name harvested on this planet type.
    pub fn resource(self) -> &'static str {
        RESOURCE_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or(UNKNOWN_RESOURCE)
    }

    /// Parse a planet type from a user-supplied string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "gas" => Ok(Self::Gas),
            "mineral" => Ok(Self::Mineral),
            "organic" => Ok(Self::Organic),
            "star" => Ok(Self::Star),
            "event" => Ok(Self::Event),
            other => Err(CoreError::UnknownPlanetType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PlanetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gas => write!(f, "Gas"),
            Self::Mineral => write!(f, "Mineral"),
            Self::Organic => write!(f, "Organic"),
            Self::Star => write!(f, "Star"),
            Self::Event => write!(f, "Event"),
        }
    }
}

/// A planet the player can visit and scavenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Display name, e.g. "Kepler 3".
    pub name: String,
    /// Composition, selects the base resource.
    pub planet_type: PlanetType,
    /// Size, scales base loot quantity.
    pub size: u32,
    /// Tier, caps the reachable rarity bands and scales quantity.
    pub tier: u32,
    /// Set once an encounter on this planet has been resolved.
    pub explored: bool,
}

impl Planet {
    /// Create an unexplored planet.
    pub fn new(name: impl Into<String>, planet_type: PlanetType, size: u32, tier: u32) -> Self {
        Self {
            name: name.into(),
            planet_type,
            size,
            tier,
            explored: false,
        }
    }

    /// Base resource name for this planet.
    pub fn resource(&self) -> &'static str {
        self.planet_type.resource()
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, size {}, tier {})",
            self.name, self.planet_type, self.size, self.tier
        )
    }
}

/// Generate a random planet inside a star system.
///
/// The planet tier is drawn from `1..system_tier`, so `system_tier` must be
/// at least 2.
pub fn generate_planet(
    system_name: &str,
    system_tier: u32,
    position: u32,
    rng: &mut StdRng,
) -> CoreResult<Planet> {
    if system_tier < 2 {
        return Err(CoreError::InvalidSystemTier(system_tier));
    }

    let planet_type = GENERATED_TYPES[rng.random_range(0..GENERATED_TYPES.len())];
    let size = rng.random_range(1..=MAX_GENERATED_SIZE);
    let tier = rng.random_range(1..system_tier);

    Ok(Planet::new(
        format!("{system_name} {position}"),
        planet_type,
        size,
        tier,
    ))
}

/// Generate `count` planets for a star system, numbered from 1.
pub fn generate_system(
    system_name: &str,
    system_tier: u32,
    count: u32,
    rng: &mut StdRng,
) -> CoreResult<Vec<Planet>> {
    (1..=count)
        .map(|pos| generate_planet(system_name, system_tier, pos, rng))
        .collect()
}
