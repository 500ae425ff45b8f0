use chrono::{DateTime, Utc};
use shared::constants::LAST_PLAYED_FORMAT;
use shared::shared_statistics::{GameTotals, ScoreTotals, Statistics};
use sqlx::SqlitePool;

/// Builds a user's statistics from the current state of the store. Each
/// figure comes from its own query; nothing is cached.
pub async fn user_statistics(pool: &SqlitePool, user_id: &str) -> Result<Statistics, sqlx::Error> {
    let games = game_totals(pool, user_id).await?;
    let scores = score_totals(pool, user_id).await?;
    Ok(Statistics::new(games, scores))
}

async fn game_totals(pool: &SqlitePool, user_id: &str) -> Result<GameTotals, sqlx::Error> {
    let total_games: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM game_records WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let correct_games: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM game_records WHERE user_id = ? AND is_correct = ?")
            .bind(user_id)
            .bind(true)
            .fetch_one(pool)
            .await?;

    let average_guesses: f64 =
        sqlx::query_scalar("SELECT COALESCE(AVG(guess_time), 0.0) FROM game_records WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    Ok(GameTotals {
        total_games,
        correct_games,
        average_guesses,
    })
}

async fn score_totals(pool: &SqlitePool, user_id: &str) -> Result<ScoreTotals, sqlx::Error> {
    // Highest score and the difficulty it was set on come from the same row.
    let best: Option<(i64, i64)> = sqlx::query_as(
        "SELECT score, difficulty FROM leaderboards WHERE user_id = ? ORDER BY score DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    let (highest_score, best_difficulty) = best.unwrap_or((0, 0));

    let total_score: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(score), 0) FROM leaderboards WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    let games_played: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leaderboards WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    let last_played: Option<DateTime<Utc>> = sqlx::query_scalar(
        "SELECT created_at FROM leaderboards WHERE user_id = ? ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(ScoreTotals {
        highest_score,
        best_difficulty,
        total_score,
        games_played,
        last_played: last_played
            .map(|at| at.format(LAST_PLAYED_FORMAT).to_string())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{insert_game_record, insert_leaderboard_entry, insert_word, test_pool};
    use chrono::TimeZone;

    #[tokio::test]
    async fn new_user_has_empty_statistics() {
        let pool = test_pool().await;
        let stats = user_statistics(&pool, "nobody").await.unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[tokio::test]
    async fn aggregates_games_and_scores() {
        let pool = test_pool().await;
        let word = insert_word(&pool, "tea", "🍵", 1).await;
        insert_game_record(&pool, word.id, "alice", true, 1).await;
        insert_game_record(&pool, word.id, "alice", true, 2).await;
        insert_game_record(&pool, word.id, "alice", false, 6).await;
        insert_game_record(&pool, word.id, "alice", true, 3).await;
        insert_game_record(&pool, word.id, "bob", false, 9).await;

        let early = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 2, 21, 5, 9).unwrap();
        insert_leaderboard_entry(&pool, "alice", 80, 3, late).await;
        insert_leaderboard_entry(&pool, "alice", 120, 2, early).await;
        insert_leaderboard_entry(&pool, "alice", 40, 1, early).await;
        insert_leaderboard_entry(&pool, "bob", 500, 5, late).await;

        let stats = user_statistics(&pool, "alice").await.unwrap();
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.correct_games, 3);
        assert_eq!(stats.average_guesses, 3.0);
        assert_eq!(stats.win_rate, 75.0);
        assert_eq!(stats.highest_score, 120);
        assert_eq!(stats.best_difficulty, 2);
        assert_eq!(stats.total_score, 240);
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.average_score, 80.0);
        assert_eq!(stats.last_played, "2024-03-02 21:05:09");
    }

    #[tokio::test]
    async fn guesses_without_scores() {
        let pool = test_pool().await;
        let word = insert_word(&pool, "sun", "☀️", 1).await;
        insert_game_record(&pool, word.id, "carol", false, 5).await;

        let stats = user_statistics(&pool, "carol").await.unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.average_guesses, 5.0);
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.last_played, "");
    }
}
