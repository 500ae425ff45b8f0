use serde::{Deserialize, Serialize};

use crate::validation::first_value;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub user_id: Option<String>,
}

impl From<Vec<(String, String)>> for StatisticsQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self {
            user_id: first_value(&pairs, "user_id"),
        }
    }
}

impl StatisticsQuery {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Aggregates over a user's game records.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GameTotals {
    pub total_games: i64,
    pub correct_games: i64,
    pub average_guesses: f64,
}

/// Aggregates over a user's leaderboard entries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScoreTotals {
    pub highest_score: i64,
    /// Difficulty of the highest-scoring entry.
    pub best_difficulty: i64,
    pub total_score: i64,
    pub games_played: i64,
    pub last_played: String,
}

/// Per-user statistics. `total_games` counts guesses, `games_played` counts
/// leaderboard submissions; the two are not expected to agree.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Statistics {
    pub total_games: i64,
    pub correct_games: i64,
    pub average_guesses: f64,
    pub highest_score: i64,
    pub total_score: i64,
    pub games_played: i64,
    pub win_rate: f64,
    pub average_score: f64,
    pub best_difficulty: i64,
    pub last_played: String,
}

impl Statistics {
    pub fn new(games: GameTotals, scores: ScoreTotals) -> Self {
        Self {
            total_games: games.total_games,
            correct_games: games.correct_games,
            average_guesses: games.average_guesses,
            highest_score: scores.highest_score,
            total_score: scores.total_score,
            games_played: scores.games_played,
            win_rate: win_rate(games.correct_games, games.total_games),
            average_score: average_score(scores.total_score, scores.games_played),
            best_difficulty: scores.best_difficulty,
            last_played: scores.last_played,
        }
    }
}

/// Percentage of correct guesses, 0 when there are none.
pub fn win_rate(correct_games: i64, total_games: i64) -> f64 {
    if total_games == 0 {
        return 0.0;
    }
    correct_games as f64 / total_games as f64 * 100.0
}

pub fn average_score(total_score: i64, games_played: i64) -> f64 {
    if games_played == 0 {
        return 0.0;
    }
    total_score as f64 / games_played as f64
}
