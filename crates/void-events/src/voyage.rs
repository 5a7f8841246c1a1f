//! A play session: one ship, one seeded RNG, one log.
//!
//! `Voyage` owns the player outright, so every resolution has exclusive
//! access to player state for its whole duration.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use void_core::{Alien, Planet, Player, generate_system};

use crate::config::{EncounterTuning, VoyageConfig};
use crate::content::{EncounterAction, aggressive_alien_encounter};
use crate::error::{EventError, EventResult};
use crate::event::Event;
use crate::logbook::{LogEntry, VoyageLog};
use crate::resolver::Resolution;

/// An ongoing voyage.
pub struct Voyage {
    player: Player,
    tuning: EncounterTuning,
    log: VoyageLog,
    rng: StdRng,
}

impl Voyage {
    /// Launch a voyage from a config.
    pub fn new(config: VoyageConfig) -> Self {
        Self {
            player: Player::new(config.starting_health, config.starting_fuel),
            tuning: config.tuning,
            log: VoyageLog::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The ship.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The captain's log.
    pub fn log(&self) -> &VoyageLog {
        &self.log
    }

    /// Encounter balance in use.
    pub fn tuning(&self) -> &EncounterTuning {
        &self.tuning
    }

    /// Survey a star system and log what was found.
    pub fn chart_system(&mut self, name: &str, tier: u32, count: u32) -> EventResult<Vec<Planet>> {
        let planets = generate_system(name, tier, count, &mut self.rng)?;
        info!(system = name, tier, planets = planets.len(), "charted system");
        self.log.append(LogEntry::SystemCharted {
            system: name.to_string(),
            tier,
            planets: planets.iter().map(|p| p.name.clone()).collect(),
            timestamp: Utc::now(),
        });
        Ok(planets)
    }

    /// Resolve a choice on an event and log it.
    pub fn encounter(&mut self, event: &mut Event, index: usize) -> EventResult<Resolution> {
        if !self.player.is_alive() {
            return Err(EventError::ShipDestroyed);
        }

        let resolution = event.resolve_choice(index, &mut self.player, &mut self.rng)?;
        let choice = event
            .choice(index)
            .map(|c| c.label.clone())
            .unwrap_or_default();

        info!(
            event = event.title(),
            choice = %choice,
            success = resolution.success,
            roll = resolution.roll,
            health = self.player.health(),
            "encounter resolved"
        );
        self.log.append(LogEntry::Encounter {
            title: event.title().to_string(),
            choice,
            success: resolution.success,
            roll: resolution.roll,
            narration: resolution.narration.clone(),
            timestamp: Utc::now(),
        });

        Ok(resolution)
    }

    /// Confront a hostile alien on a planet.
    ///
    /// The planet is marked explored when the outcome says so.
    pub fn explore(
        &mut self,
        planet: &mut Planet,
        alien: &Alien,
        action: EncounterAction,
    ) -> EventResult<Resolution> {
        let mut event = aggressive_alien_encounter(alien, planet, &self.tuning);
        let resolution = self.encounter(&mut event, action.index())?;

        if resolution.explored && !planet.explored {
            planet.explored = true;
            self.log.append(LogEntry::PlanetExplored {
                planet: planet.name.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(resolution)
    }
}
