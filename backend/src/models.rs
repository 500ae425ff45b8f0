use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A word/emoji pair from the catalog. Seeded once, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub emoji: String,
    pub difficulty: i64,
    pub created_at: DateTime<Utc>,
}

/// One graded guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameRecord {
    pub id: i64,
    pub word_id: i64,
    pub user_id: String,
    pub is_correct: bool,
    pub guess_time: i64,
    pub created_at: DateTime<Utc>,
}

/// One scored submission. A user may own any number of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub player_name: String,
    pub user_id: String,
    pub score: i64,
    pub difficulty: i64,
    pub created_at: DateTime<Utc>,
}
