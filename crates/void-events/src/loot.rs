//! Rarity-banded loot table.
//!
//! A source's tier caps which rarity bands are reachable: tier N unlocks the
//! first N bands, tier 0 unlocks none. Each reachable band rolls its own drop
//! check, and a hit yields the base quantity scaled by the band's multiplier
//! and an external bonus, plus some jitter. When nothing hits the player
//! still gets a small consolation pile of the common band.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum base quantity, also used when a source is too small to yield any.
pub const FLOOR_QUANTITY: u32 = 5;

/// Loot quality band, ordered from common to legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Always drops when reachable.
    Common,
    /// 75% drop, 0.8x quantity.
    Uncommon,
    /// 50% drop, 0.6x quantity.
    Rare,
    /// 25% drop, 0.4x quantity.
    Epic,
    /// 10% drop, 0.2x quantity.
    Legendary,
}

impl Rarity {
    /// All bands in ordinal order.
    pub const ALL: [Self; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    /// Position of this band, 0 for common.
    pub fn ordinal(self) -> usize {
        match self {
            Self::Common => 0,
            Self::Uncommon => 1,
            Self::Rare => 2,
            Self::Epic => 3,
            Self::Legendary => 4,
        }
    }

    /// Chance in `[0, 1]` that this band drops once reachable.
    pub fn drop_probability(self) -> f64 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 0.75,
            Self::Rare => 0.5,
            Self::Epic => 0.25,
            Self::Legendary => 0.1,
        }
    }

    /// Fraction of the base quantity a hit yields.
    pub fn quantity_multiplier(self) -> f64 {
        match self {
            Self::Common => 1.0,
            Self::Uncommon => 0.8,
            Self::Rare => 0.6,
            Self::Epic => 0.4,
            Self::Legendary => 0.2,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Uncommon => write!(f, "Uncommon"),
            Self::Rare => write!(f, "Rare"),
            Self::Epic => write!(f, "Epic"),
            Self::Legendary => write!(f, "Legendary"),
        }
    }
}

/// One line of harvested loot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootDrop {
    /// Full item name, e.g. "Rare Fuel".
    pub item: String,
    /// Units found, always at least 1.
    pub quantity: u32,
    /// The band this drop came from.
    pub rarity: Rarity,
    /// True for the fallback pile handed out when no band hit.
    pub consolation: bool,
}

static BANDS: [Rarity; 5] = Rarity::ALL;

/// Bands reachable from a source of the given tier.
pub fn applicable_rarities(tier: u32) -> &'static [Rarity] {
    let count = usize::try_from(tier).unwrap_or(usize::MAX).min(BANDS.len());
    &BANDS[..count]
}

/// Roll the base quantity for a source.
///
/// `max(1, tier) * (size / 2)`, jittered by `[0, base/5) - base/10`. A source
/// too small to yield anything gets [`FLOOR_QUANTITY`] ± 1 instead. The
/// result is never below [`FLOOR_QUANTITY`].
pub fn base_quantity(tier: u32, size: u32, rng: &mut StdRng) -> u32 {
    let base = i64::from(size / 2) * i64::from(tier.max(1));

    let quantity = if base > 0 {
        base + rng.random_range(0..(base / 5).max(1)) - base / 10
    } else {
        i64::from(FLOOR_QUANTITY) + rng.random_range(-1..=1)
    };

    to_quantity(quantity.max(i64::from(FLOOR_QUANTITY)))
}

/// Harvest loot from a source.
///
/// `bonus` is an external strength-like stat; every 200 points add 1x to the
/// quantity of each hit. Drops come back in band order, with the
/// consolation drop (if any) last.
pub fn generate_loot(
    tier: u32,
    size: u32,
    base_name: &str,
    bonus: u32,
    rng: &mut StdRng,
) -> Vec<LootDrop> {
    let base = base_quantity(tier, size, rng);
    let bonus_multiplier = 1.0 + f64::from(bonus) / 200.0;
    let mut drops = Vec::new();

    for &rarity in applicable_rarities(tier) {
        let draw: f64 = rng.random();
        if draw >= rarity.drop_probability() {
            debug!(%rarity, draw, "loot band missed");
            continue;
        }

        let mut quantity =
            (f64::from(base) * rarity.quantity_multiplier() * bonus_multiplier) as i64;
        quantity += rng.random_range(0..(quantity / 4).max(1)) - quantity / 8;
        let quantity = to_quantity(quantity.max(1));

        debug!(%rarity, draw, quantity, "loot band hit");
        drops.push(LootDrop {
            item: format!("{rarity} {base_name}"),
            quantity,
            rarity,
            consolation: false,
        });
    }

    if drops.is_empty() {
        let quantity = to_quantity((i64::from(base) / 5 + rng.random_range(0..3)).max(1));
        debug!(quantity, "no band hit, handing out consolation");
        drops.push(LootDrop {
            item: format!("{} {base_name}", Rarity::Common),
            quantity,
            rarity: Rarity::Common,
            consolation: true,
        });
    }

    drops
}

/// Render drops as the narration block shown after a successful harvest.
pub fn format_loot_report(drops: &[LootDrop]) -> String {
    let mut out = String::from("You scavenge the area and find:");
    for drop in drops {
        out.push_str(&format!("\n- {} unit(s) of {}", drop.quantity, drop.item));
        if drop.consolation {
            out.push_str(" (minor traces)");
        }
    }
    out
}

fn to_quantity(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
