use std::fmt;
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use shared::constants::DEFAULT_DIFFICULTY;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

/// One catalog entry as written in the seed file.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct SeedWord {
    #[validate(length(min = 1))]
    pub word: String,
    #[validate(length(min = 1))]
    pub emoji: String,
    #[serde(default = "default_difficulty")]
    #[validate(range(min = 1))]
    pub difficulty: i64,
}

fn default_difficulty() -> i64 {
    DEFAULT_DIFFICULTY
}

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { index: usize, reason: String },
    Database(sqlx::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read seed file: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse seed file: {}", e),
            Self::Invalid { index, reason } => write!(f, "Invalid seed word #{}: {}", index, reason),
            Self::Database(e) => write!(f, "Failed to seed words: {}", e),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Database(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

pub fn parse_seed_words(content: &str) -> Result<Vec<SeedWord>, SeedError> {
    let words: Vec<SeedWord> = serde_json::from_str(content).map_err(SeedError::Parse)?;
    for (index, word) in words.iter().enumerate() {
        word.validate().map_err(|errors| SeedError::Invalid {
            index,
            reason: shared::validation::describe(&errors),
        })?;
    }
    Ok(words)
}

/// Inserts `words` when the catalog is empty. Returns how many rows were
/// written; an existing catalog is never touched.
pub async fn seed_words(pool: &SqlitePool, words: &[SeedWord]) -> Result<u64, SeedError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        info!(existing, "Word catalog already seeded, skipping");
        return Ok(0);
    }

    let now = Utc::now();
    for word in words {
        sqlx::query("INSERT INTO words (word, emoji, difficulty, created_at) VALUES (?, ?, ?, ?)")
            .bind(&word.word)
            .bind(&word.emoji)
            .bind(word.difficulty)
            .bind(now)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(count = words.len(), "Seeded word catalog");
    Ok(words.len() as u64)
}

pub async fn seed_from_file(pool: &SqlitePool, path: &Path) -> Result<u64, SeedError> {
    let content = tokio::fs::read_to_string(path).await.map_err(SeedError::Io)?;
    let words = parse_seed_words(&content)?;
    seed_words(pool, &words).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_pool;
    use std::io::Write;

    #[test]
    fn difficulty_defaults_to_one() {
        let words = parse_seed_words(r#"[{"word": "猫", "emoji": "🐱"}]"#).unwrap();
        assert_eq!(words[0].difficulty, 1);
    }

    #[test]
    fn rejects_blank_and_zero_difficulty() {
        let err = parse_seed_words(
            r#"[{"word": "sun", "emoji": "☀️"}, {"word": "", "emoji": "🌧️", "difficulty": 0}]"#,
        )
        .unwrap_err();
        match err {
            SeedError::Invalid { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("difficulty"));
                assert!(reason.contains("word"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn seeds_only_empty_catalog() {
        let pool = test_pool().await;
        let words = parse_seed_words(
            r#"[{"word": "apple", "emoji": "🍎"}, {"word": "rocket", "emoji": "🚀", "difficulty": 2}]"#,
        )
        .unwrap();

        assert_eq!(seed_words(&pool, &words).await.unwrap(), 2);
        assert_eq!(seed_words(&pool, &words).await.unwrap(), 0);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM words")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn reads_seed_file() {
        let pool = test_pool().await;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"word": "moon", "emoji": "🌙", "difficulty": 3}}]"#).unwrap();

        assert_eq!(seed_from_file(&pool, file.path()).await.unwrap(), 1);

        let difficulty: i64 = sqlx::query_scalar("SELECT difficulty FROM words WHERE word = 'moon'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(difficulty, 3);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let pool = test_pool().await;
        let err = seed_from_file(&pool, Path::new("/nonexistent/words.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
