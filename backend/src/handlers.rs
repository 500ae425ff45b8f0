use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::constants::{
    FETCH_LEADERBOARD_ERROR, FETCH_STATISTICS_ERROR, FETCH_WORDS_ERROR, NO_WORDS_ERROR,
    SAVE_GUESS_ERROR, SAVE_LEADERBOARD_ERROR, USER_ID_REQUIRED_ERROR, WORD_NOT_FOUND_ERROR,
};
use shared::shared_game::{Guess, GuessRequest, GuessResponse};
use shared::shared_leaderboard::{LeaderboardQuery, NewLeaderboardEntry, NewLeaderboardEntryRequest};
use shared::shared_statistics::{Statistics, StatisticsQuery};
use shared::shared_words::WordQuery;
use tracing::debug;

use crate::error::Error;
use crate::models::{LeaderboardEntry, Word};
use crate::services::{game_service, leaderboard_service, statistics_service, word_service};
use crate::AppState;

/// Decoded query string. Keys may repeat; the query types keep the first
/// value of each.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// `GET /api/words/random?difficulty=`
pub async fn get_random_word(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Word>, Error> {
    let Query(pairs) = query?;
    let query = WordQuery::from(pairs);
    let Some(difficulty) = query.single_difficulty() else {
        return Err(Error::NotFound(NO_WORDS_ERROR));
    };

    word_service::random_word(&state.pool, difficulty)
        .await
        .map_err(Error::persistence(FETCH_WORDS_ERROR))?
        .map(Json)
        .ok_or(Error::NotFound(NO_WORDS_ERROR))
}

/// `GET /api/words/batch?difficulty=`. An empty tier is an empty list, not
/// an error.
pub async fn get_random_words(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Word>>, Error> {
    let Query(pairs) = query?;
    let query = WordQuery::from(pairs);
    let Some(difficulty) = query.batch_difficulty() else {
        debug!(difficulty = ?query.difficulty, "Batch difficulty matches no words");
        return Ok(Json(Vec::new()));
    };

    let words = word_service::random_words(&state.pool, difficulty, query.round_size())
        .await
        .map_err(Error::persistence(FETCH_WORDS_ERROR))?;
    Ok(Json(words))
}

/// `GET /api/words/:id`
pub async fn get_word_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Word>, Error> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(Error::NotFound(WORD_NOT_FOUND_ERROR));
    };

    word_service::word_by_id(&state.pool, id)
        .await
        .map_err(Error::persistence(FETCH_WORDS_ERROR))?
        .map(Json)
        .ok_or(Error::NotFound(WORD_NOT_FOUND_ERROR))
}

/// `POST /api/game/guess`
pub async fn submit_guess(
    State(state): State<AppState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, Error> {
    let Json(request) = payload?;
    let guess = Guess::try_from(request)?;

    let graded = game_service::record_guess(&state.pool, &guess)
        .await
        .map_err(Error::persistence(SAVE_GUESS_ERROR))?
        .ok_or(Error::NotFound(WORD_NOT_FOUND_ERROR))?;

    Ok(Json(GuessResponse {
        is_correct: graded.record.is_correct,
        answer: graded.word.word,
    }))
}

/// `GET /api/statistics?user_id=`
pub async fn get_statistics(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Statistics>, Error> {
    let Query(pairs) = query?;
    let query = StatisticsQuery::from(pairs);
    let user_id = query
        .user_id()
        .ok_or_else(|| Error::BadRequest(USER_ID_REQUIRED_ERROR.to_string()))?;

    let stats = statistics_service::user_statistics(&state.pool, user_id)
        .await
        .map_err(Error::persistence(FETCH_STATISTICS_ERROR))?;
    Ok(Json(stats))
}

/// `GET /api/leaderboard?difficulty=&limit=`
pub async fn get_leaderboard(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<LeaderboardEntry>>, Error> {
    let Query(pairs) = query?;
    let query = LeaderboardQuery::from(pairs);
    let difficulty = query.difficulty_filter();
    let limit = query.limit();

    let entries = leaderboard_service::top_entries(&state.pool, difficulty, limit)
        .await
        .map_err(Error::persistence(FETCH_LEADERBOARD_ERROR))?;
    debug!(?difficulty, limit, count = entries.len(), "Fetched leaderboard");
    Ok(Json(entries))
}

/// `POST /api/leaderboard`
pub async fn add_leaderboard_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewLeaderboardEntryRequest>, JsonRejection>,
) -> Result<Json<LeaderboardEntry>, Error> {
    let Json(request) = payload?;
    let entry = NewLeaderboardEntry::try_from(request)?;

    let saved = leaderboard_service::add_entry(&state.pool, &entry)
        .await
        .map_err(Error::persistence(SAVE_LEADERBOARD_ERROR))?;
    Ok(Json(saved))
}
