//! Weighted choice resolution.
//!
//! A d100 draw in `[0, 100)` below the choice's success chance means
//! success. Exactly one of the choice's two outcomes is then applied to the
//! player. Nothing is retried or rolled back.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use void_core::{PlayerMutator, StatKind};

use crate::choice::{Choice, Effect, Outcome};
use crate::loot::{LootDrop, format_loot_report, generate_loot};

/// What happened when a choice was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Whether the success outcome was applied.
    pub success: bool,
    /// The d100 draw, 0-99.
    pub roll: u32,
    /// Rendered narration, empty when the outcome says nothing.
    pub narration: String,
    /// Total hull damage dealt.
    pub damage: u32,
    /// Everything harvested.
    pub loot: Vec<LootDrop>,
    /// Whether the outcome flagged its source as explored.
    pub explored: bool,
}

/// Draw d100 and report success against a percent chance.
pub fn roll_chance(chance: u32, rng: &mut StdRng) -> (bool, u32) {
    let roll: u32 = rng.random_range(0..100);
    (roll < chance, roll)
}

/// Resolve a choice against the player.
pub fn resolve(choice: &Choice, player: &mut dyn PlayerMutator, rng: &mut StdRng) -> Resolution {
    let (success, roll) = roll_chance(choice.success_chance, rng);
    let outcome = if success {
        &choice.on_success
    } else {
        &choice.on_failure
    };

    let mut tally = Tally::default();
    let narration = apply_outcome(outcome, player, rng, &mut tally);

    debug!(
        choice = %choice.label,
        chance = choice.success_chance,
        roll,
        success,
        damage = tally.damage,
        drops = tally.loot.len(),
        "resolved choice"
    );

    Resolution {
        success,
        roll,
        narration,
        damage: tally.damage,
        loot: tally.loot,
        explored: tally.explored,
    }
}

/// Running totals while an outcome (and any nested gamble) is applied.
#[derive(Debug, Default)]
struct Tally {
    damage: u32,
    loot: Vec<LootDrop>,
    explored: bool,
}

fn apply_outcome(
    outcome: &Outcome,
    player: &mut dyn PlayerMutator,
    rng: &mut StdRng,
    tally: &mut Tally,
) -> String {
    let mut detail = String::new();
    let mut harvested = Vec::new();

    for effect in &outcome.effects {
        match effect {
            Effect::Damage { base, spread, bonus } => {
                let damage = base
                    .saturating_add(rng.random_range(0..=*spread))
                    .saturating_add(*bonus);
                player.update_stat(StatKind::Health, -to_delta(damage));
                tally.damage = tally.damage.saturating_add(damage);
            }
            Effect::AdjustStat { stat, delta } => player.update_stat(*stat, *delta),
            Effect::GiveItem { item, amount } => player.add_item_to_inventory(item, *amount),
            Effect::Harvest {
                tier,
                size,
                resource,
                bonus,
            } => {
                let drops = generate_loot(*tier, *size, resource, *bonus, rng);
                for drop in &drops {
                    player.add_item_to_inventory(&drop.item, drop.quantity);
                }
                harvested.extend(drops);
            }
            Effect::Gamble { chance, win, lose } => {
                // NaN never wins.
                let p = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
                let branch = if rng.random_bool(p) {
                    win
                } else {
                    lose
                };
                detail = apply_outcome(branch, player, rng, tally);
            }
            Effect::MarkExplored => tally.explored = true,
        }
    }

    let loot_report = if harvested.is_empty() {
        String::new()
    } else {
        format_loot_report(&harvested)
    };
    tally.loot.extend(harvested);

    outcome
        .narration
        .replace("{damage}", &tally.damage.to_string())
        .replace("{loot}", &loot_report)
        .replace("{detail}", &detail)
        .trim()
        .to_string()
}

fn to_delta(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use void_core::Player;

    /// Records every call so tests can check which handler ran.
    #[derive(Default)]
    struct Recorder {
        stats: Vec<(StatKind, i32)>,
        items: Vec<(String, u32)>,
    }

    impl PlayerMutator for Recorder {
        fn update_stat(&mut self, stat: StatKind, delta: i32) {
            self.stats.push((stat, delta));
        }

        fn add_item_to_inventory(&mut self, name: &str, amount: u32) {
            self.items.push((name.to_string(), amount));
        }
    }

    fn marker_choice(chance: u32) -> Choice {
        Choice::new(
            "Probe",
            chance,
            Outcome::new("yes").with(Effect::GiveItem {
                item: "Success Token".into(),
                amount: 1,
            }),
            Outcome::new("no").with(Effect::GiveItem {
                item: "Failure Token".into(),
                amount: 1,
            }),
        )
    }

    #[test]
    fn exactly_one_handler_runs() {
        let mut rng = StdRng::seed_from_u64(42);
        for chance in [0, 1, 50, 99, 100] {
            for _ in 0..100 {
                let mut rec = Recorder::default();
                let r = resolve(&marker_choice(chance), &mut rec, &mut rng);
                assert_eq!(rec.items.len(), 1);
                let expected = if r.success {
                    "Success Token"
                } else {
                    "Failure Token"
                };
                assert_eq!(rec.items[0].0, expected);
                assert_eq!(r.narration, if r.success { "yes" } else { "no" });
            }
        }
    }

    #[test]
    fn roll_in_range_and_decides() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = resolve(&marker_choice(37), &mut Recorder::default(), &mut rng);
            assert!(r.roll < 100);
            assert_eq!(r.success, r.roll < 37);
        }
    }

    #[test]
    fn zero_and_hundred_are_certain() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(!resolve(&marker_choice(0), &mut Recorder::default(), &mut rng).success);
            assert!(resolve(&marker_choice(100), &mut Recorder::default(), &mut rng).success);
        }
    }

    #[test]
    fn success_rate_converges() {
        let trials = 20_000;
        let mut rng = StdRng::seed_from_u64(2024);
        for chance in (0..=100).step_by(10) {
            let hits = (0..trials)
                .filter(|_| roll_chance(chance, &mut rng).0)
                .count();
            let rate = hits as f64 / f64::from(trials);
            let expected = f64::from(chance) / 100.0;
            assert!(
                (rate - expected).abs() < 0.02,
                "chance {chance}: rate {rate:.3}"
            );
        }
    }

    #[test]
    fn damage_within_bounds_and_narrated() {
        let mut rng = StdRng::seed_from_u64(9);
        let choice = Choice::new(
            "Brace",
            100,
            Outcome::new("You take {damage} damage.").with(Effect::Damage {
                base: 15,
                spread: 10,
                bonus: 4,
            }),
            Outcome::silent(),
        );
        for _ in 0..200 {
            let mut rec = Recorder::default();
            let r = resolve(&choice, &mut rec, &mut rng);
            assert!((19..=29).contains(&r.damage));
            assert_eq!(rec.stats, vec![(StatKind::Health, -(r.damage as i32))]);
            assert_eq!(r.narration, format!("You take {} damage.", r.damage));
        }
    }

    #[test]
    fn harvest_fills_inventory_and_report() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut player = Player::default();
        let choice = Choice::new(
            "Scavenge",
            100,
            Outcome::new("Victory!\n{loot}")
                .with(Effect::Harvest {
                    tier: 2,
                    size: 30,
                    resource: "Biomass".into(),
                    bonus: 0,
                })
                .with(Effect::MarkExplored),
            Outcome::silent(),
        );
        let r = resolve(&choice, &mut player, &mut rng);
        assert!(r.explored);
        assert!(!r.loot.is_empty());
        assert!(r.narration.starts_with("Victory!\nYou scavenge the area and find:"));
        for drop in &r.loot {
            assert!(player.item_count(&drop.item) >= drop.quantity);
            assert!(r.narration.contains(&drop.item));
        }
    }

    #[test]
    fn gamble_applies_one_branch() {
        let mut rng = StdRng::seed_from_u64(12);
        let choice = Choice::new(
            "Board",
            100,
            Outcome::new("{detail}").with(Effect::Gamble {
                chance: 0.5,
                win: Box::new(Outcome::new("found tech").with(Effect::GiveItem {
                    item: "Rare Tech".into(),
                    amount: 1,
                })),
                lose: Box::new(Outcome::new("hurt").with(Effect::Damage {
                    base: 10,
                    spread: 0,
                    bonus: 0,
                })),
            }),
            Outcome::silent(),
        );
        let (mut wins, mut losses) = (0, 0);
        for _ in 0..200 {
            let mut rec = Recorder::default();
            let r = resolve(&choice, &mut rec, &mut rng);
            match r.narration.as_str() {
                "found tech" => {
                    wins += 1;
                    assert_eq!(rec.items.len(), 1);
                    assert!(rec.stats.is_empty());
                }
                "hurt" => {
                    losses += 1;
                    assert_eq!(r.damage, 10);
                    assert!(rec.items.is_empty());
                }
                other => panic!("unexpected narration {other:?}"),
            }
        }
        assert!(wins > 0 && losses > 0);
    }

    #[test]
    fn gamble_with_nan_chance_loses() {
        let mut rng = StdRng::seed_from_u64(8);
        let choice = Choice::new(
            "Pull the lever",
            100,
            Outcome::new("{detail}").with(Effect::Gamble {
                chance: f64::NAN,
                win: Box::new(Outcome::new("jackpot")),
                lose: Box::new(Outcome::new("nothing")),
            }),
            Outcome::silent(),
        );
        for _ in 0..50 {
            let r = resolve(&choice, &mut Recorder::default(), &mut rng);
            assert_eq!(r.narration, "nothing");
        }
    }

    #[test]
    fn silent_failure_renders_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let choice = Choice::new("Wait", 0, Outcome::silent(), Outcome::silent());
        let r = resolve(&choice, &mut Recorder::default(), &mut rng);
        assert!(!r.success);
        assert!(r.narration.is_empty());
        assert_eq!(r.damage, 0);
    }
}
