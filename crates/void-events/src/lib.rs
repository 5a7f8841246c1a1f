//! Encounter resolution and loot generation for Last in the Void.
//!
//! An [`Event`] offers the player a menu of [`Choice`]s. Resolving a choice
//! rolls d100 against its success chance and applies one of its two
//! outcomes to the player. Outcomes are plain data ([`Effect`] lists plus a
//! narration template), and harvesting loot goes through the rarity-banded
//! [`loot`] table. A [`Voyage`] ties a player, a seeded RNG, and a log
//! together for a whole play session.

pub mod choice;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod logbook;
pub mod loot;
pub mod resolver;
pub mod voyage;

pub use choice::{Choice, Effect, Outcome};
pub use config::{EncounterTuning, VoyageConfig};
pub use content::{EncounterAction, aggressive_alien_encounter, derelict_ship};
pub use error::{EventError, EventResult};
pub use event::Event;
pub use logbook::{LogEntry, VoyageLog};
pub use loot::{LootDrop, Rarity, generate_loot};
pub use resolver::{Resolution, resolve};
pub use voyage::Voyage;
