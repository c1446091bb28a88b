use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single corpus word, stored exactly as it appears in the source file.
pub type WordEntry = String;

/// A (word, usage count) pair from the frequency dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub word: String,
    pub count: u64,
}

impl FrequencyRecord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self { word: word.into(), count }
    }
}

/// What the frequency loader does with a row whose count does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFailurePolicy {
    /// Keep the row with a count of zero.
    #[default]
    CoerceToZero,
    /// Fail the whole load.
    Reject,
}

impl ParseFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseFailurePolicy::CoerceToZero => "coerce_to_zero",
            ParseFailurePolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for ParseFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coerce_to_zero" | "coerce" | "zero" => Ok(ParseFailurePolicy::CoerceToZero),
            "reject" => Ok(ParseFailurePolicy::Reject),
            other => Err(format!("unknown parse failure policy: {other}")),
        }
    }
}

/// A persisted game: the word a player has to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub word: String,
    pub created_on: DateTime<Utc>,
}

impl GameRecord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            created_on: Utc::now(),
        }
    }
}
