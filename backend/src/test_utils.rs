//! Helpers shared by the inline test modules.

use std::str::FromStr;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use crate::models::Word;
use crate::{create_router, db, AppState};

/// Fresh in-memory database with migrations applied. A single connection
/// that never expires keeps the database alive for the pool's lifetime.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid in-memory database url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    db::migrate(&pool).await.expect("Failed to run migrations");
    pool
}

pub fn test_app(pool: SqlitePool) -> Router {
    create_router(AppState { pool })
}

pub async fn insert_word(pool: &SqlitePool, word: &str, emoji: &str, difficulty: i64) -> Word {
    sqlx::query_as::<_, Word>(
        "INSERT INTO words (word, emoji, difficulty, created_at) VALUES (?, ?, ?, ?) RETURNING id, word, emoji, difficulty, created_at",
    )
    .bind(word)
    .bind(emoji)
    .bind(difficulty)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .expect("Failed to insert word")
}

pub async fn insert_game_record(pool: &SqlitePool, word_id: i64, user_id: &str, is_correct: bool, guess_time: i64) {
    sqlx::query("INSERT INTO game_records (word_id, user_id, is_correct, guess_time, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(word_id)
        .bind(user_id)
        .bind(is_correct)
        .bind(guess_time)
        .bind(Utc::now())
        .execute(pool)
        .await
        .expect("Failed to insert game record");
}

pub async fn insert_leaderboard_entry(
    pool: &SqlitePool,
    user_id: &str,
    score: i64,
    difficulty: i64,
    created_at: DateTime<Utc>,
) {
    sqlx::query("INSERT INTO leaderboards (player_name, user_id, score, difficulty, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(format!("{user_id}-name"))
        .bind(user_id)
        .bind(score)
        .bind(difficulty)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Failed to insert leaderboard entry");
}

pub async fn count_game_records(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM game_records")
        .fetch_one(pool)
        .await
        .expect("Failed to count game records")
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}
