use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Body of `POST /game/guess`. Every field is required; optional here only
/// so that a missing field surfaces as a validation message.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct GuessRequest {
    #[validate(
        required(message = "word_id is required"),
        range(min = 1, message = "word_id must be a positive integer")
    )]
    pub word_id: Option<i64>,
    #[validate(
        required(message = "guess is required"),
        length(min = 1, message = "guess must not be empty")
    )]
    pub guess: Option<String>,
    #[validate(
        required(message = "user_id is required"),
        length(min = 1, message = "user_id must not be empty")
    )]
    pub user_id: Option<String>,
    #[validate(
        required(message = "guess_time is required"),
        range(min = 1, message = "guess_time must be at least 1")
    )]
    pub guess_time: Option<i64>,
}

/// A guess that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub word_id: i64,
    pub guess: String,
    pub user_id: String,
    pub guess_time: i64,
}

impl TryFrom<GuessRequest> for Guess {
    type Error = ValidationErrors;

    fn try_from(request: GuessRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        match (request.word_id, request.guess, request.user_id, request.guess_time) {
            (Some(word_id), Some(guess), Some(user_id), Some(guess_time)) => Ok(Guess {
                word_id,
                guess,
                user_id,
                guess_time,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

impl Guess {
    /// Exact, case-sensitive comparison against the stored word.
    pub fn matches(&self, answer: &str) -> bool {
        self.guess == answer
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResponse {
    pub is_correct: bool,
    /// Always the stored word, so a client can reveal it after a miss.
    pub answer: String,
}
