use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DIFFICULTY, EASY_ROUND_SIZE, HARD_ROUND_SIZE, MEDIUM_ROUND_SIZE};
use crate::validation::{first_value, parse_integer};

/// Query string for `/words/random` and `/words/batch`.
///
/// Difficulty stays a raw string here: the batch endpoint picks its round
/// size from the literal value, and a value that is not an integer simply
/// matches no words.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordQuery {
    pub difficulty: Option<String>,
}

impl From<Vec<(String, String)>> for WordQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            difficulty: first_value(&pairs, "difficulty"),
        }
    }
}

impl WordQuery {
    /// Difficulty for a single random word. Absent means the easiest tier;
    /// `None` means the value can never match a word.
    pub fn single_difficulty(&self) -> Option<i64> {
        match self.difficulty.as_deref() {
            None => Some(DEFAULT_DIFFICULTY),
            Some(raw) => parse_integer(raw),
        }
    }

    /// Difficulty for a batch. Unlike the single-word lookup there is no
    /// default, so an absent value matches nothing.
    pub fn batch_difficulty(&self) -> Option<i64> {
        self.difficulty.as_deref().and_then(parse_integer)
    }

    pub fn round_size(&self) -> i64 {
        round_size(self.difficulty.as_deref())
    }
}

/// Number of words in a round for the given difficulty string.
pub fn round_size(difficulty: Option<&str>) -> i64 {
    match difficulty {
        Some("2") => MEDIUM_ROUND_SIZE,
        Some("3") => HARD_ROUND_SIZE,
        _ => EASY_ROUND_SIZE,
    }
}
