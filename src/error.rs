use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;
use tracing::error;

/// Every storage or adapter failure crosses the service boundary as one of
/// these kinds; raw sqlx errors never reach a handler unclassified.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("username already taken")]
    DuplicateUsername,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found")]
    NotFound,

    #[error("a user cannot judge themselves")]
    SelfReference,

    #[error("photo upload failed: {0}")]
    UploadFailure(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// True when `err` is the storage engine reporting a UNIQUE violation.
    /// Used to turn the username constraint into DuplicateUsername.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        err.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    }

    /// True when `err` is a FOREIGN KEY violation, i.e. an edge referenced a
    /// user id that does not exist.
    pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
        err.as_database_error()
            .is_some_and(|db| db.is_foreign_key_violation())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Unauthorized => {
                Redirect::to("/login?notice=login_required").into_response()
            }
            AppError::SelfReference | AppError::DuplicateUsername => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid credentials").into_response()
            }
            AppError::UploadFailure(reason) => {
                error!("photo store error: {}", reason);
                StatusCode::BAD_GATEWAY.into_response()
            }
            AppError::PasswordHash(reason) => {
                error!("password hashing error: {}", reason);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Database(e) => {
                error!("database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
