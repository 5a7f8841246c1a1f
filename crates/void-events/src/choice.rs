//! Choices and the outcome data they carry.
//!
//! Outcomes are described as data rather than callbacks: a list of
//! [`Effect`]s to apply to the player plus a narration template. The
//! template may reference `{damage}` (total hull damage dealt), `{loot}`
//! (the harvest report) and `{detail}` (the narration of a nested
//! [`Effect::Gamble`] branch).

use serde::{Deserialize, Serialize};
use void_core::StatKind;

/// Highest success chance a choice can carry.
pub const MAX_CHANCE: u32 = 100;

/// A single change an outcome makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Hull damage of `base + uniform[0..=spread] + bonus`.
    Damage {
        /// Fixed part.
        base: u32,
        /// Upper bound of the random part, inclusive.
        #[serde(default)]
        spread: u32,
        /// Extra fixed part, usually derived from the opponent.
        #[serde(default)]
        bonus: u32,
    },
    /// Signed change to a stat.
    AdjustStat {
        /// Stat to change.
        stat: StatKind,
        /// Amount to add (negative to subtract).
        delta: i32,
    },
    /// Put items into the cargo hold.
    GiveItem {
        /// Item name.
        item: String,
        /// Units to add.
        amount: u32,
    },
    /// Roll the loot table for a source and store everything found.
    Harvest {
        /// Source tier.
        tier: u32,
        /// Source size.
        size: u32,
        /// Base resource name, e.g. "Fuel".
        resource: String,
        /// Quantity bonus, e.g. a defeated alien's strength.
        #[serde(default)]
        bonus: u32,
    },
    /// A nested coin flip between two sub-outcomes.
    Gamble {
        /// Chance in `[0, 1]` of taking `win`, clamped; NaN always loses.
        chance: f64,
        /// Applied on a win.
        win: Box<Outcome>,
        /// Applied otherwise.
        lose: Box<Outcome>,
    },
    /// Flag the encounter's source as explored.
    MarkExplored,
}

/// What happens when a choice succeeds or fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Effects, applied in order.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Narration template shown to the player.
    #[serde(default)]
    pub narration: String,
}

impl Outcome {
    /// An outcome with narration and no effects yet.
    pub fn new(narration: impl Into<String>) -> Self {
        Self {
            effects: Vec::new(),
            narration: narration.into(),
        }
    }

    /// An outcome that does nothing and says nothing.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// A labeled option with a success chance and two outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown on the button.
    pub label: String,
    /// Percent chance of success, 0-100.
    pub success_chance: u32,
    /// Applied when the roll succeeds.
    pub on_success: Outcome,
    /// Applied when the roll fails.
    #[serde(default)]
    pub on_failure: Outcome,
}

impl Choice {
    /// Create a choice. The chance is capped at 100.
    pub fn new(
        label: impl Into<String>,
        success_chance: u32,
        on_success: Outcome,
        on_failure: Outcome,
    ) -> Self {
        Self {
            label: label.into(),
            success_chance: success_chance.min(MAX_CHANCE),
            on_success,
            on_failure,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.label, self.success_chance)
    }
}
