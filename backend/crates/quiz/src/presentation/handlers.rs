//! HTTP Handlers

use crate::application::config::QuizConfig;
use crate::application::get_question_set::{GetQuestionSetInput, GetQuestionSetUseCase};
use crate::application::get_question_sets::{GetQuestionSetsInput, GetQuestionSetsUseCase};
use crate::domain::repository::{QuestionRepository, QuestionSetRepository};
use crate::error::QuizResult;
use crate::presentation::presenters::{QuestionSetPresenter, QuestionSetsPresenter};
use axum::extract::{Path, State};
use axum::response::Response;
use kernel::id::QuestionSetId;
use std::sync::Arc;

/// Shared state for quiz handlers
#[derive(Clone)]
pub struct QuizAppState<R>
where
    R: QuestionSetRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QuizConfig>,
}

/// GET /api/v1/QuestionSet
pub async fn list_question_sets<R>(State(state): State<QuizAppState<R>>) -> QuizResult<Response>
where
    R: QuestionSetRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        GetQuestionSetsUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    use_case
        .execute(GetQuestionSetsInput::default(), QuestionSetsPresenter)
        .await
}

/// GET /api/v1/QuestionSet/{id}
pub async fn get_question_set<R>(
    State(state): State<QuizAppState<R>>,
    Path(id): Path<i64>,
) -> QuizResult<Response>
where
    R: QuestionSetRepository + QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetQuestionSetUseCase::new(state.repo.clone(), state.repo.clone());

    let input = GetQuestionSetInput {
        id: QuestionSetId::new(id),
    };

    use_case.execute(input, QuestionSetPresenter).await
}
