//! Quiz Router

use crate::application::config::QuizConfig;
use crate::domain::repository::{QuestionRepository, QuestionSetRepository};
use crate::presentation::handlers::{self, QuizAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the quiz router for any repository implementation
pub fn quiz_router<R>(repo: R, config: QuizConfig) -> Router
where
    R: QuestionSetRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let state = QuizAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/QuestionSet", get(handlers::list_question_sets::<R>))
        .route("/QuestionSet/{id}", get(handlers::get_question_set::<R>))
        .with_state(state)
}
