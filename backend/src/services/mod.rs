//! Store access for the three game tables. Every function takes the pool
//! explicitly and returns raw `sqlx` errors; handlers decide how those
//! surface to clients.

pub mod game_service;
pub mod leaderboard_service;
pub mod statistics_service;
pub mod word_service;
