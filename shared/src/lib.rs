pub mod constants;
pub mod shared_game;
pub mod shared_leaderboard;
pub mod shared_statistics;
pub mod shared_words;
pub mod validation;

use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}
