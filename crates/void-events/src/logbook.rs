//! The captain's log: a chronological record of a voyage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line in the captain's log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogEntry {
    /// A star system was surveyed.
    SystemCharted {
        /// System name.
        system: String,
        /// System tier.
        tier: u32,
        /// Names of the planets found.
        planets: Vec<String>,
        /// When charted.
        timestamp: DateTime<Utc>,
    },
    /// A choice was resolved.
    Encounter {
        /// Event title.
        title: String,
        /// Label of the choice taken.
        choice: String,
        /// Whether it succeeded.
        success: bool,
        /// The d100 draw.
        roll: u32,
        /// Rendered narration.
        narration: String,
        /// When resolved.
        timestamp: DateTime<Utc>,
    },
    /// A planet was marked explored.
    PlanetExplored {
        /// Planet name.
        planet: String,
        /// When explored.
        timestamp: DateTime<Utc>,
    },
}

/// Chronological log of a voyage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoyageLog {
    entries: Vec<LogEntry>,
}

impl VoyageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Captain's Log\n\n");
        for entry in &self.entries {
            match entry {
                LogEntry::SystemCharted {
                    system,
                    tier,
                    planets,
                    ..
                } => {
                    out.push_str(&format!("## {system} (tier {tier})\n\n"));
                    for planet in planets {
                        out.push_str(&format!("- {planet}\n"));
                    }
                    out.push('\n');
                }
                LogEntry::Encounter {
                    title,
                    choice,
                    success,
                    roll,
                    narration,
                    ..
                } => {
                    let verdict = if *success { "Success" } else { "Failure" };
                    out.push_str(&format!("**{title}**: {choice}\n"));
                    out.push_str(&format!("  *{verdict}* (rolled {roll})\n"));
                    for line in narration.lines() {
                        out.push_str(&format!("  > {line}\n"));
                    }
                    out.push('\n');
                }
                LogEntry::PlanetExplored { planet, .. } => {
                    out.push_str(&format!("*{planet} explored.*\n\n"));
                }
            }
        }
        out
    }
}
