//! Presenters
//!
//! Output port adapters: each use case callback becomes an HTTP response.
//! A presenter is built per request and consumed by the callback.

use crate::application::get_question_set::GetQuestionSetOutputPort;
use crate::application::get_question_sets::GetQuestionSetsOutputPort;
use crate::domain::views::{QuestionSetDetail, QuestionSetListItem};
use crate::presentation::dto::{QuestionSetDetailResponse, QuestionSetListItemResponse};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Renders the question set listing
#[derive(Debug, Default)]
pub struct QuestionSetsPresenter;

impl GetQuestionSetsOutputPort for QuestionSetsPresenter {
    type Output = Response;

    fn ok(self, question_sets: Vec<QuestionSetListItem>) -> Response {
        let body: Vec<QuestionSetListItemResponse> =
            question_sets.into_iter().map(Into::into).collect();
        (StatusCode::OK, Json(body)).into_response()
    }

    fn not_found(self) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Renders a single question set
#[derive(Debug, Default)]
pub struct QuestionSetPresenter;

impl GetQuestionSetOutputPort for QuestionSetPresenter {
    type Output = Response;

    fn ok(self, question_set: QuestionSetDetail) -> Response {
        let body = QuestionSetDetailResponse::from(question_set);
        (StatusCode::OK, Json(body)).into_response()
    }

    fn not_found(self) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }

    fn invalid(self) -> Response {
        StatusCode::BAD_REQUEST.into_response()
    }
}
