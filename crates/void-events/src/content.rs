//! Built-in encounters.

use void_core::{Alien, Planet, StatKind};

use crate::choice::{Choice, Effect, Outcome};
use crate::config::EncounterTuning;
use crate::error::{EventError, EventResult};
use crate::event::Event;

/// Practical bounds for attack chances.
pub const ATTACK_CHANCE_BOUNDS: (u32, u32) = (10, 90);

/// Practical bounds for escape chances.
pub const FLEE_CHANCE_BOUNDS: (u32, u32) = (25, 95);

/// The two options offered by an alien encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterAction {
    /// Fight for the planet's resources.
    Attack,
    /// Try to get away.
    Flee,
}

impl EncounterAction {
    /// Index of this action in the encounter's choice list.
    pub fn index(self) -> usize {
        match self {
            Self::Attack => 0,
            Self::Flee => 1,
        }
    }

    /// Parse an action from a user-supplied string.
    pub fn parse(s: &str) -> EventResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "attack" | "fight" => Ok(Self::Attack),
            "flee" | "run" | "escape" => Ok(Self::Flee),
            other => Err(EventError::UnknownAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for EncounterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Flee => write!(f, "flee"),
        }
    }
}

/// Attack chance against an alien: aggression/5 off the base, within bounds.
pub fn attack_chance(alien: &Alien, tuning: &EncounterTuning) -> u32 {
    penalized(tuning.attack_base_chance, alien.aggression / 5, ATTACK_CHANCE_BOUNDS)
}

/// Escape chance from an alien: aggression/10 off the base, within bounds.
pub fn flee_chance(alien: &Alien, tuning: &EncounterTuning) -> u32 {
    penalized(tuning.flee_base_chance, alien.aggression / 10, FLEE_CHANCE_BOUNDS)
}

fn penalized(base: u32, penalty: u32, (lo, hi): (u32, u32)) -> u32 {
    base.saturating_sub(penalty).clamp(lo, hi)
}

/// Build the hostile alien encounter for a planet.
///
/// Winning the fight harvests the planet's resource with the alien's
/// strength as a loot bonus. Every outcome leaves the planet explored.
pub fn aggressive_alien_encounter(
    alien: &Alien,
    planet: &Planet,
    tuning: &EncounterTuning,
) -> Event {
    let name = &alien.name;

    let attack = Choice::new(
        format!("Attack the {name}"),
        attack_chance(alien, tuning),
        Outcome::new(format!(
            "You bravely fought and defeated the {name}!\n{{loot}}"
        ))
        .with(Effect::Harvest {
            tier: planet.tier,
            size: planet.size,
            resource: planet.resource().to_string(),
            bonus: alien.strength,
        })
        .with(Effect::MarkExplored),
        Outcome::new(format!(
            "The {name} overpowered you! Its strength was formidable. \
             You take {{damage}} damage to your hull integrity."
        ))
        .with(Effect::Damage {
            base: tuning.damage_base,
            spread: tuning.damage_range,
            bonus: alien.strength / 10,
        })
        .with(Effect::MarkExplored),
    );

    let mut escape = Outcome::new(format!(
        "You managed to escape from the {name}, but suffered {{damage}} damage \
         to your hull integrity in the hasty retreat."
    ))
    .with(Effect::Damage {
        base: tuning.flee_damage_base,
        spread: tuning.flee_damage_range,
        bonus: 0,
    });
    if alien.aggression > tuning.panic_threshold {
        escape = escape.with(Effect::Damage {
            base: 0,
            spread: tuning.panic_range,
            bonus: 0,
        });
    }

    let flee = Choice::new(
        "Attempt to Flee",
        flee_chance(alien, tuning),
        escape.with(Effect::MarkExplored),
        Outcome::new(format!(
            "Your attempt to flee from the {name} failed! It caught up and dealt {{damage}} damage."
        ))
        .with(Effect::Damage {
            base: tuning.damage_base,
            spread: tuning.damage_range,
            bonus: alien.strength / 5,
        })
        .with(Effect::MarkExplored),
    );

    Event::new(
        format!("Aggressive Alien Encounter on {}", planet.name),
        format!(
            "You've encountered an aggressive {alien} on {}. It looks hostile!",
            planet.name
        ),
    )
    .with_choice(attack)
    .with_choice(flee)
}

/// Build the derelict freighter encounter.
pub fn derelict_ship() -> Event {
    let salvage = Outcome::new("{detail}").with(Effect::Gamble {
        chance: 0.5,
        win: Box::new(
            Outcome::new("You salvaged Rare Tech and repaired your ship: +10 health.")
                .with(Effect::GiveItem {
                    item: "Rare Tech".into(),
                    amount: 1,
                })
                .with(Effect::AdjustStat {
                    stat: StatKind::Health,
                    delta: 10,
                }),
        ),
        lose: Box::new(
            Outcome::new("Salvage succeeded but you sustained minor injuries: -{damage} health.")
                .with(Effect::Damage {
                    base: 10,
                    spread: 0,
                    bonus: 0,
                }),
        ),
    });

    Event::new(
        "Derelict Ship",
        "You discover a derelict freighter drifting in space.",
    )
    .with_choice(Choice::new(
        "Board carefully",
        70,
        salvage,
        Outcome::new("Hull breach on entry! You take {damage} health damage.").with(
            Effect::Damage {
                base: 20,
                spread: 0,
                bonus: 0,
            },
        ),
    ))
    .with_choice(Choice::new(
        "Scan from orbit",
        90,
        Outcome::new("Scan reveals valuable cargo location. Fuel -5.").with(Effect::AdjustStat {
            stat: StatKind::Fuel,
            delta: -5,
        }),
        Outcome::new("Sensor malfunction. No data gained."),
    ))
    .with_choice(Choice::new(
        "Ignore and move on",
        100,
        Outcome::new("You avoid potential danger and continue your journey."),
        Outcome::silent(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use void_core::{Player, PlanetType};

    fn planet() -> Planet {
        Planet::new("Kepler 3", PlanetType::Gas, 40, 3)
    }

    #[test]
    fn chances_follow_aggression() {
        let t = EncounterTuning::default();
        assert_eq!(attack_chance(&Alien::new("A", 0, 0), &t), 60);
        assert_eq!(attack_chance(&Alien::new("A", 0, 50), &t), 50);
        assert_eq!(flee_chance(&Alien::new("A", 0, 50), &t), 80);
        assert_eq!(flee_chance(&Alien::new("A", 0, 100), &t), 75);
    }

    #[test]
    fn chances_clamped() {
        let t = EncounterTuning {
            attack_base_chance: 100,
            flee_base_chance: 10,
            ..EncounterTuning::default()
        };
        assert_eq!(attack_chance(&Alien::new("A", 0, 0), &t), 90);
        assert_eq!(flee_chance(&Alien::new("A", 0, 0), &t), 25);

        let t = EncounterTuning {
            attack_base_chance: 5,
            ..EncounterTuning::default()
        };
        assert_eq!(attack_chance(&Alien::new("A", 0, 100), &t), 10);
    }

    #[test]
    fn alien_encounter_shape() {
        let alien = Alien::new("Gorg", 50, 30);
        let e = aggressive_alien_encounter(&alien, &planet(), &EncounterTuning::default());
        assert_eq!(e.title(), "Aggressive Alien Encounter on Kepler 3");
        assert!(e.description().contains("Gorg (Strength: 50, Aggression: 30)"));
        assert_eq!(e.choices().len(), 2);
        assert_eq!(e.choices()[0].label, "Attack the Gorg");
        assert_eq!(e.choices()[0].success_chance, 54);
        assert_eq!(e.choices()[1].label, "Attempt to Flee");
        assert_eq!(e.choices()[1].success_chance, 82);
    }

    #[test]
    fn attack_outcomes() {
        let alien = Alien::new("Gorg", 50, 30);
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let mut e = aggressive_alien_encounter(&alien, &planet(), &EncounterTuning::default());
            let mut player = Player::default();
            let r = e.resolve_choice(0, &mut player, &mut rng).unwrap();
            assert!(r.explored);
            if r.success {
                assert_eq!(r.damage, 0);
                assert!(r.loot.iter().all(|d| d.item.ends_with(" Fuel")));
                assert!(player.item_count("Common Fuel") > 0);
                assert!(e.success_message().unwrap().contains("defeated the Gorg"));
            } else {
                // 15 + [0..=10] + 50/10
                assert!((20..=30).contains(&r.damage));
                assert_eq!(player.health(), 100 - r.damage as i32);
                assert!(player.inventory().is_empty());
            }
        }
    }

    #[test]
    fn flee_outcomes() {
        let calm = Alien::new("Drifter", 20, 10);
        let frenzied = Alien::new("Ravager", 20, 90);
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..300 {
            for alien in [&calm, &frenzied] {
                let mut e = aggressive_alien_encounter(alien, &planet(), &EncounterTuning::default());
                let r = e
                    .resolve_choice(1, &mut Player::default(), &mut rng)
                    .unwrap();
                assert!(r.explored);
                assert!(r.loot.is_empty());
                let max_escape = if alien.aggression > 75 { 14 } else { 10 };
                if r.success {
                    assert!((5..=max_escape).contains(&r.damage), "{}", r.damage);
                } else {
                    // 15 + [0..=10] + 20/5
                    assert!((19..=29).contains(&r.damage), "{}", r.damage);
                }
            }
        }
    }

    #[test]
    fn derelict_shape() {
        let e = derelict_ship();
        let chances: Vec<_> = e.choices().iter().map(|c| c.success_chance).collect();
        assert_eq!(chances, vec![70, 90, 100]);
    }

    #[test]
    fn derelict_ignore_always_succeeds() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut e = derelict_ship();
        let mut player = Player::default();
        let r = e.resolve_choice(2, &mut player, &mut rng).unwrap();
        assert!(r.success);
        assert_eq!(player, Player::default());
        assert_eq!(
            e.success_message(),
            Some("You avoid potential danger and continue your journey.")
        );
    }

    #[test]
    fn derelict_boarding_outcomes() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let mut e = derelict_ship();
            let mut player = Player::new(50, 50);
            let r = e.resolve_choice(0, &mut player, &mut rng).unwrap();
            match (r.success, player.item_count("Rare Tech")) {
                (true, 1) => assert_eq!(player.health(), 60),
                (true, 0) => assert_eq!(player.health(), 40),
                (false, 0) => {
                    assert_eq!(player.health(), 30);
                    assert_eq!(
                        e.failure_message(),
                        Some("Hull breach on entry! You take 20 health damage.")
                    );
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn action_parse() {
        assert_eq!(EncounterAction::parse("Attack").unwrap(), EncounterAction::Attack);
        assert_eq!(EncounterAction::parse("run").unwrap(), EncounterAction::Flee);
        assert!(EncounterAction::parse("negotiate").is_err());
        assert_eq!(EncounterAction::Flee.index(), 1);
    }
}
