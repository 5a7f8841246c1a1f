//! One-shot encounters offering a menu of weighted choices.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use void_core::PlayerMutator;

use crate::choice::Choice;
use crate::error::{EventError, EventResult};
use crate::resolver::{Resolution, resolve};

/// An encounter: a title, a description, and the choices on offer.
///
/// Only the two narration messages change after construction; they are set
/// when a choice is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    description: String,
    choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failure_message: Option<String>,
}

impl Event {
    /// Create an event with no choices.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
            success_message: None,
            failure_message: None,
        }
    }

    /// Parse an event definition from JSON.
    pub fn from_json(json: &str) -> EventResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a choice.
    pub fn add_choice(&mut self, choice: Choice) {
        self.choices.push(choice);
    }

    /// Append a choice, builder style.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.add_choice(choice);
        self
    }

    /// Event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Event description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Choices in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The choice at `index`, if any.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// Narration from the last successful resolution.
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Narration from the last failed resolution.
    pub fn failure_message(&self) -> Option<&str> {
        self.failure_message.as_deref()
    }

    /// Resolve the choice at `index` and record its narration.
    pub fn resolve_choice(
        &mut self,
        index: usize,
        player: &mut dyn PlayerMutator,
        rng: &mut StdRng,
    ) -> EventResult<Resolution> {
        let choice = self
            .choices
            .get(index)
            .ok_or(EventError::ChoiceOutOfRange {
                index,
                count: self.choices.len(),
            })?;

        let resolution = resolve(choice, player, rng);

        if !resolution.narration.is_empty() {
            let slot = if resolution.success {
                &mut self.success_message
            } else {
                &mut self.failure_message
            };
            *slot = Some(resolution.narration.clone());
        }

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::{Effect, Outcome};
    use rand::SeedableRng;
    use void_core::{Player, StatKind};

    fn sample() -> Event {
        Event::new("Ion Storm", "A storm rolls over the bow.")
            .with_choice(Choice::new(
                "Ride it out",
                100,
                Outcome::new("You hold course.").with(Effect::AdjustStat {
                    stat: StatKind::Fuel,
                    delta: -5,
                }),
                Outcome::silent(),
            ))
            .with_choice(Choice::new(
                "Vent the reactor",
                0,
                Outcome::silent(),
                Outcome::new("The reactor stalls. {damage} damage.").with(Effect::Damage {
                    base: 20,
                    spread: 0,
                    bonus: 0,
                }),
            ))
    }

    #[test]
    fn accessors() {
        let e = sample();
        assert_eq!(e.title(), "Ion Storm");
        assert_eq!(e.description(), "A storm rolls over the bow.");
        assert_eq!(e.choices().len(), 2);
        assert_eq!(e.choice(1).unwrap().label, "Vent the reactor");
        assert!(e.choice(2).is_none());
        assert!(e.success_message().is_none());
        assert!(e.failure_message().is_none());
    }

    #[test]
    fn success_sets_success_message() {
        let mut e = sample();
        let mut player = Player::default();
        let mut rng = StdRng::seed_from_u64(1);
        let r = e.resolve_choice(0, &mut player, &mut rng).unwrap();
        assert!(r.success);
        assert_eq!(e.success_message(), Some("You hold course."));
        assert!(e.failure_message().is_none());
        assert_eq!(player.fuel(), 95);
    }

    #[test]
    fn failure_sets_failure_message() {
        let mut e = sample();
        let mut player = Player::default();
        let mut rng = StdRng::seed_from_u64(1);
        let r = e.resolve_choice(1, &mut player, &mut rng).unwrap();
        assert!(!r.success);
        assert_eq!(e.failure_message(), Some("The reactor stalls. 20 damage."));
        assert!(e.success_message().is_none());
        assert_eq!(player.health(), 80);
    }

    #[test]
    fn out_of_range_choice() {
        let mut e = sample();
        let mut rng = StdRng::seed_from_u64(1);
        let err = e
            .resolve_choice(5, &mut Player::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            EventError::ChoiceOutOfRange { index: 5, count: 2 }
        ));
    }

    #[test]
    fn json_roundtrip() {
        let e = sample();
        let json = serde_json::to_string(&e).unwrap();
        let back = Event::from_json(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn invalid_json_rejected() {
        assert!(matches!(
            Event::from_json("{\"title\": 3}"),
            Err(EventError::Parse(_))
        ));
    }
}
