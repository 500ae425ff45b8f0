use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::DEFAULT_LEADERBOARD_LIMIT;
use crate::validation::{first_value, parse_integer};

/// Body of `POST /leaderboard`.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct NewLeaderboardEntryRequest {
    #[validate(
        required(message = "user_id is required"),
        length(min = 1, message = "user_id must not be empty")
    )]
    pub user_id: Option<String>,
    #[validate(
        required(message = "player_name is required"),
        length(min = 1, message = "player_name must not be empty")
    )]
    pub player_name: Option<String>,
    pub score: Option<i64>,
    #[validate(
        required(message = "difficulty is required"),
        range(min = 1, message = "difficulty must be at least 1")
    )]
    pub difficulty: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaderboardEntry {
    pub user_id: String,
    pub player_name: String,
    pub score: i64,
    pub difficulty: i64,
}

impl TryFrom<NewLeaderboardEntryRequest> for NewLeaderboardEntry {
    type Error = ValidationErrors;

    fn try_from(request: NewLeaderboardEntryRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        match (request.user_id, request.player_name, request.difficulty) {
            (Some(user_id), Some(player_name), Some(difficulty)) => Ok(NewLeaderboardEntry {
                user_id,
                player_name,
                score: request.score.unwrap_or(0),
                difficulty,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Query string for `GET /leaderboard`. Both values are lenient: a
/// difficulty that is not an integer means "all difficulties", a bad limit
/// means the default.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeaderboardQuery {
    pub difficulty: Option<String>,
    pub limit: Option<String>,
}

impl From<Vec<(String, String)>> for LeaderboardQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            difficulty: first_value(&pairs, "difficulty"),
            limit: first_value(&pairs, "limit"),
        }
    }
}

impl LeaderboardQuery {
    pub fn difficulty_filter(&self) -> Option<i64> {
        self.difficulty.as_deref().and_then(parse_integer)
    }

    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(parse_integer)
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
    }
}
