use chrono::Utc;
use shared::shared_leaderboard::NewLeaderboardEntry;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::info;

use crate::models::LeaderboardEntry;

/// Appends a new entry. Earlier entries for the same user are kept as-is.
pub async fn add_entry(
    pool: &SqlitePool,
    entry: &NewLeaderboardEntry,
) -> Result<LeaderboardEntry, sqlx::Error> {
    let saved = sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        INSERT INTO leaderboards (player_name, user_id, score, difficulty, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, player_name, user_id, score, difficulty, created_at
        "#,
    )
    .bind(&entry.player_name)
    .bind(&entry.user_id)
    .bind(entry.score)
    .bind(entry.difficulty)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    info!(
        event = "leaderboard_entry_added",
        user_id = %saved.user_id,
        score = saved.score,
        difficulty = saved.difficulty,
        "Leaderboard entry saved for {}",
        saved.player_name
    );

    Ok(saved)
}

/// Highest scores first, optionally restricted to one difficulty. Order among
/// equal scores is whatever the store returns.
pub async fn top_entries(
    pool: &SqlitePool,
    difficulty: Option<i64>,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, player_name, user_id, score, difficulty, created_at FROM leaderboards",
    );
    if let Some(difficulty) = difficulty {
        query.push(" WHERE difficulty = ").push_bind(difficulty);
    }
    query.push(" ORDER BY score DESC LIMIT ").push_bind(limit);

    query.build_query_as::<LeaderboardEntry>().fetch_all(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_pool;

    fn entry(user_id: &str, score: i64, difficulty: i64) -> NewLeaderboardEntry {
        NewLeaderboardEntry {
            user_id: user_id.to_string(),
            player_name: format!("{user_id}-name"),
            score,
            difficulty,
        }
    }

    #[tokio::test]
    async fn repeated_entries_are_all_kept() {
        let pool = test_pool().await;
        let first = add_entry(&pool, &entry("u1", 10, 1)).await.unwrap();
        let second = add_entry(&pool, &entry("u1", 30, 1)).await.unwrap();
        assert_ne!(first.id, second.id);

        let all = top_entries(&pool, None, 10).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].score, 30);
        assert_eq!(all[1].score, 10);
    }

    #[tokio::test]
    async fn filters_by_difficulty_and_limits() {
        let pool = test_pool().await;
        for (i, score) in [50, 20, 90, 70, 10, 60, 40].into_iter().enumerate() {
            add_entry(&pool, &entry(&format!("u{i}"), score, 1)).await.unwrap();
        }
        add_entry(&pool, &entry("hard", 1000, 3)).await.unwrap();

        let top = top_entries(&pool, Some(1), 5).await.unwrap();
        let scores: Vec<i64> = top.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 70, 60, 50, 40]);
        assert!(top.iter().all(|e| e.difficulty == 1));

        let everything = top_entries(&pool, None, 10).await.unwrap();
        assert_eq!(everything.len(), 8);
        assert_eq!(everything[0].user_id, "hard");
    }

    #[tokio::test]
    async fn new_entry_takes_its_score_position() {
        let pool = test_pool().await;
        for score in [100, 60, 20] {
            add_entry(&pool, &entry("seed", score, 2)).await.unwrap();
        }
        let added = add_entry(&pool, &entry("newcomer", 75, 2)).await.unwrap();

        let board = top_entries(&pool, None, 10).await.unwrap();
        let position = board.iter().position(|e| e.id == added.id).unwrap();
        assert_eq!(position, 1);
    }
}
