use sqlx::SqlitePool;

use crate::models::Word;

const WORD_COLUMNS: &str = "id, word, emoji, difficulty, created_at";

/// Picks one word of the given difficulty uniformly at random.
pub async fn random_word(pool: &SqlitePool, difficulty: i64) -> Result<Option<Word>, sqlx::Error> {
    sqlx::query_as::<_, Word>(&format!(
        "SELECT {WORD_COLUMNS} FROM words WHERE difficulty = ? ORDER BY RANDOM() LIMIT 1"
    ))
    .bind(difficulty)
    .fetch_optional(pool)
    .await
}

// TODO: ORDER BY RANDOM() sorts the whole tier; switch to sampling ids if the catalog grows past a few thousand rows.
/// Up to `count` distinct words of the given difficulty in random order.
pub async fn random_words(
    pool: &SqlitePool,
    difficulty: i64,
    count: i64,
) -> Result<Vec<Word>, sqlx::Error> {
    sqlx::query_as::<_, Word>(&format!(
        "SELECT {WORD_COLUMNS} FROM words WHERE difficulty = ? ORDER BY RANDOM() LIMIT ?"
    ))
    .bind(difficulty)
    .bind(count)
    .fetch_all(pool)
    .await
}

pub async fn word_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Word>, sqlx::Error> {
    sqlx::query_as::<_, Word>(&format!("SELECT {WORD_COLUMNS} FROM words WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}
