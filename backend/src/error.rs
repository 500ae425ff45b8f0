use std::fmt;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::ErrorResponse;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum Error {
    /// Missing or malformed request field.
    BadRequest(String),
    /// The referenced word (or any word at all) does not exist.
    NotFound(&'static str),
    /// Store read or write failed. `message` is what the client sees.
    Persistence {
        message: &'static str,
        source: sqlx::Error,
    },
}

impl Error {
    /// `map_err` adapter that tags a store failure with a client message.
    pub fn persistence(message: &'static str) -> impl FnOnce(sqlx::Error) -> Error {
        move |source| Error::Persistence { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(message) => write!(f, "{}", message),
            Self::NotFound(message) => write!(f, "{}", message),
            Self::Persistence { message, source } => write!(f, "{}: {}", message, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(source: sqlx::Error) -> Self {
        Error::Persistence {
            message: "Database error",
            source,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::BadRequest(shared::validation::describe(&errors))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::BadRequest(message) => message,
            Self::NotFound(message) => message.to_string(),
            Self::Persistence { message, source } => {
                error!(error = %source, "{}", message);
                message.to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
