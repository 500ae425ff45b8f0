use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers::{
    add_leaderboard_entry, get_leaderboard, get_random_word, get_random_words, get_statistics,
    get_word_by_id, health_check, submit_guess,
};

mod config;
mod db;
mod error;
mod handlers;
mod logging;
mod models;
mod seed;
mod services;
#[cfg(test)]
mod test_utils;

/// Per-request dependencies. The pool is the only shared state.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

pub fn create_router(state: AppState) -> Router {
    let word_routes = Router::new()
        .route("/random", get(get_random_word))
        .route("/batch", get(get_random_words))
        .route("/:id", get(get_word_by_id));

    Router::new()
        .route("/api/health_check", get(health_check))
        .nest("/api/words", word_routes)
        .route("/api/game/guess", axum::routing::post(submit_guess))
        .route("/api/statistics", get(get_statistics))
        .route("/api/leaderboard", get(get_leaderboard).post(add_leaderboard_entry))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup()?;

    let config = Config::from_env()?;
    let pool = db::connect(&config).await?;

    if let Some(path) = &config.words_seed_file {
        let inserted = seed::seed_from_file(&pool, path).await?;
        info!("Loaded {} words from {}", inserted, path.display());
    }

    let app = create_router(AppState { pool });

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
