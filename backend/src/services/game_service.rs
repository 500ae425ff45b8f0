use chrono::Utc;
use shared::shared_game::Guess;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{GameRecord, Word};
use crate::services::word_service;

/// A persisted guess together with the word it was graded against.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedGuess {
    pub record: GameRecord,
    pub word: Word,
}

/// Grades `guess` and stores the result. `None` when the word does not
/// exist, in which case nothing is written.
pub async fn record_guess(pool: &SqlitePool, guess: &Guess) -> Result<Option<GradedGuess>, sqlx::Error> {
    let Some(word) = word_service::word_by_id(pool, guess.word_id).await? else {
        return Ok(None);
    };

    let record = sqlx::query_as::<_, GameRecord>(
        r#"
        INSERT INTO game_records (word_id, user_id, is_correct, guess_time, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, word_id, user_id, is_correct, guess_time, created_at
        "#,
    )
    .bind(word.id)
    .bind(&guess.user_id)
    .bind(guess.matches(&word.word))
    .bind(guess.guess_time)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    info!(
        user_id = %record.user_id,
        word_id = record.word_id,
        is_correct = record.is_correct,
        "Recorded guess"
    );

    Ok(Some(GradedGuess { record, word }))
}
