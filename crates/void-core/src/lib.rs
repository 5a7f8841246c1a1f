//! Core types for Last in the Void.
//!
//! Holds the pieces of game state that encounter resolution reads from or
//! writes to: the player and its mutation contract, planets with their
//! resource lookup and procedural generation, and encountered aliens.

pub mod alien;
pub mod error;
pub mod planet;
pub mod player;

pub use alien::Alien;
pub use error::{CoreError, CoreResult};
pub use planet::{Planet, PlanetType, generate_planet, generate_system};
pub use player::{Player, PlayerMutator, StatKind};
