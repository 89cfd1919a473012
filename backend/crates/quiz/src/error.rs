//! Quiz Error Types
//!
//! Failures that abort a request. Expected outcomes such as "no question
//! sets" or "invalid id" are not errors; they go through the use case output
//! ports instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

pub type QuizResult<T> = Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    /// Backing store failed while reading
    #[error("Repository error: {0}")]
    Repository(String),

    /// Seed fixture could not be read or is inconsistent
    #[error("Seed error: {0}")]
    Seed(String),
}

impl QuizError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::Repository(_) => StatusCode::SERVICE_UNAVAILABLE,
            QuizError::Seed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self) {
        match self {
            QuizError::Repository(msg) => {
                tracing::error!(message = %msg, "Quiz repository error");
            }
            QuizError::Seed(msg) => {
                tracing::error!(message = %msg, "Quiz seed error");
            }
        }
    }
}

/// Generic client-facing message; the quiz error rides along as source
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        let app_err = match err {
            QuizError::Repository(_) => AppError::service_unavailable("Question bank unavailable"),
            QuizError::Seed(_) => AppError::internal("Question bank failed to load"),
        };
        app_err.with_source(err)
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::Seed(err.to_string())
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Seed(err.to_string())
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
