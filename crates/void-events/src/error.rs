//! Error types for the encounter engine.

use thiserror::Error;

/// Result type for encounter operations.
pub type EventResult<T> = Result<T, EventError>;

/// Errors that can occur while running encounters.
#[derive(Debug, Error)]
pub enum EventError {
    /// The selected choice does not exist on the event.
    #[error("choice {index} out of range: event has {count} choice(s)")]
    ChoiceOutOfRange {
        /// The requested index.
        index: usize,
        /// How many choices the event offers.
        count: usize,
    },

    /// The player's hull is gone; no further encounters can be resolved.
    #[error("the ship has been destroyed")]
    ShipDestroyed,

    /// Unknown encounter action name.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// An event or config document failed to parse.
    #[error("invalid document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Core model error.
    #[error("{0}")]
    Core(#[from] void_core::CoreError),
}
