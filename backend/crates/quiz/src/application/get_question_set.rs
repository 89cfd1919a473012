//! Get Question Set Use Case

use crate::domain::repository::{QuestionRepository, QuestionSetRepository};
use crate::domain::services::{distinct_categories, set_difficulty};
use crate::domain::views::QuestionSetDetail;
use crate::error::QuizResult;
use kernel::id::QuestionSetId;
use std::sync::Arc;

/// Input DTO for get question set
#[derive(Debug, Clone)]
pub struct GetQuestionSetInput {
    pub id: QuestionSetId,
}

/// Outcomes of the single-set lookup; each callback consumes the port
pub trait GetQuestionSetOutputPort {
    type Output;

    fn ok(self, question_set: QuestionSetDetail) -> Self::Output;

    fn not_found(self) -> Self::Output;

    /// The id can never match a stored set
    fn invalid(self) -> Self::Output;
}

/// Get Question Set Use Case
pub struct GetQuestionSetUseCase<S, Q>
where
    S: QuestionSetRepository,
    Q: QuestionRepository,
{
    question_set_repo: Arc<S>,
    question_repo: Arc<Q>,
}

impl<S, Q> GetQuestionSetUseCase<S, Q>
where
    S: QuestionSetRepository,
    Q: QuestionRepository,
{
    pub fn new(question_set_repo: Arc<S>, question_repo: Arc<Q>) -> Self {
        Self {
            question_set_repo,
            question_repo,
        }
    }

    pub async fn execute<P>(&self, input: GetQuestionSetInput, port: P) -> QuizResult<P::Output>
    where
        P: GetQuestionSetOutputPort,
    {
        if !input.id.is_valid() {
            tracing::debug!(question_set_id = %input.id, "Rejected invalid question set id");
            return Ok(port.invalid());
        }

        let Some(question_set) = self.question_set_repo.find_by_id(input.id).await? else {
            tracing::debug!(question_set_id = %input.id, "Question set not found");
            return Ok(port.not_found());
        };

        let questions = self
            .question_repo
            .get_questions_by_set_id(question_set.id)
            .await?;

        tracing::info!(
            question_set_id = %question_set.id,
            questions = questions.len(),
            "Loaded question set"
        );

        Ok(port.ok(QuestionSetDetail {
            difficulty: set_difficulty(&questions),
            tags: distinct_categories(&questions),
            question_set,
            questions,
        }))
    }
}
