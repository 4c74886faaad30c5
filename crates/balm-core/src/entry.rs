use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// One mood check-in.
///
/// `level` is 1 (very low) to 5 (very good). The analyzer accepts any value
/// arithmetically; range enforcement happens at the CLI boundary only.
/// Entries are immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Ulid,
    pub timestamp: DateTime<Utc>,
    pub level: u8,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// One-tap check-in (no factors or notes form).
    #[serde(default)]
    pub quick: bool,
}

impl MoodEntry {
    pub fn new(level: u8, factors: Vec<String>, notes: Option<String>, quick: bool) -> Self {
        Self {
            id: Ulid::new(),
            timestamp: Utc::now(),
            level,
            factors,
            notes,
            quick,
        }
    }
}

/// A free-text journal entry tied to the prompt it answered.
///
/// Opaque to the analyzer; sentiment and word stats are derived
/// presentation-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionEntry {
    pub id: Ulid,
    pub timestamp: DateTime<Utc>,
    pub prompt: String,
    pub response: String,
}

impl ReflectionEntry {
    pub fn new(prompt: String, response: String) -> Self {
        Self {
            id: Ulid::new(),
            timestamp: Utc::now(),
            prompt,
            response,
        }
    }
}
