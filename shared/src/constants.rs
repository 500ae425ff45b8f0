pub const API_BASE_URL: &str = "http://localhost:8080/api";
pub const RANDOM_WORD_ENDPOINT: &str = "/words/random";
pub const WORD_BATCH_ENDPOINT: &str = "/words/batch";
pub const GUESS_ENDPOINT: &str = "/game/guess";
pub const STATISTICS_ENDPOINT: &str = "/statistics";
pub const LEADERBOARD_ENDPOINT: &str = "/leaderboard";

pub const DEFAULT_DIFFICULTY: i64 = 1;
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

pub const EASY_ROUND_SIZE: i64 = 10;
pub const MEDIUM_ROUND_SIZE: i64 = 20;
pub const HARD_ROUND_SIZE: i64 = 30;

/// Layout of `Statistics::last_played`.
pub const LAST_PLAYED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const NO_WORDS_ERROR: &str = "No words found";
pub const WORD_NOT_FOUND_ERROR: &str = "Word not found";
pub const USER_ID_REQUIRED_ERROR: &str = "User ID is required";
pub const SAVE_GUESS_ERROR: &str = "Failed to save game record";
pub const SAVE_LEADERBOARD_ERROR: &str = "Failed to save leaderboard entry";
pub const FETCH_LEADERBOARD_ERROR: &str = "Failed to fetch leaderboard";
pub const FETCH_WORDS_ERROR: &str = "Failed to fetch words";
pub const FETCH_STATISTICS_ERROR: &str = "Failed to fetch statistics";
