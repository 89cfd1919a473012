//! Get Question Sets Use Case
//!
//! Lists every question set with its normalized difficulty and distinct
//! category tags.

use crate::application::config::QuizConfig;
use crate::domain::entities::QuestionSet;
use crate::domain::repository::{QuestionRepository, QuestionSetRepository};
use crate::domain::services::{distinct_categories, set_difficulty};
use crate::domain::views::QuestionSetListItem;
use crate::error::QuizResult;
use futures::future::try_join_all;
use std::sync::Arc;

/// Input DTO for get question sets (takes no parameters)
#[derive(Debug, Clone, Default)]
pub struct GetQuestionSetsInput {}

/// Outcomes of the listing; each callback consumes the port
pub trait GetQuestionSetsOutputPort {
    type Output;

    fn ok(self, question_sets: Vec<QuestionSetListItem>) -> Self::Output;

    fn not_found(self) -> Self::Output;
}

/// Get Question Sets Use Case
pub struct GetQuestionSetsUseCase<S, Q>
where
    S: QuestionSetRepository,
    Q: QuestionRepository,
{
    question_set_repo: Arc<S>,
    question_repo: Arc<Q>,
    config: Arc<QuizConfig>,
}

impl<S, Q> GetQuestionSetsUseCase<S, Q>
where
    S: QuestionSetRepository,
    Q: QuestionRepository,
{
    pub fn new(question_set_repo: Arc<S>, question_repo: Arc<Q>, config: Arc<QuizConfig>) -> Self {
        Self {
            question_set_repo,
            question_repo,
            config,
        }
    }

    pub async fn execute<P>(&self, _input: GetQuestionSetsInput, port: P) -> QuizResult<P::Output>
    where
        P: GetQuestionSetsOutputPort,
    {
        let question_sets = self.question_set_repo.get_all().await?;

        if question_sets.is_empty() {
            tracing::debug!("No question sets found");
            return Ok(port.not_found());
        }

        // try_join_all yields results by input index, not completion order
        let items = if self.config.concurrent_question_fetch {
            try_join_all(question_sets.into_iter().map(|set| self.list_item(set))).await?
        } else {
            let mut items = Vec::with_capacity(question_sets.len());
            for set in question_sets {
                items.push(self.list_item(set).await?);
            }
            items
        };

        tracing::info!(
            count = items.len(),
            concurrent = self.config.concurrent_question_fetch,
            "Listed question sets"
        );

        Ok(port.ok(items))
    }

    async fn list_item(&self, question_set: QuestionSet) -> QuizResult<QuestionSetListItem> {
        let questions = self
            .question_repo
            .get_questions_by_set_id(question_set.id)
            .await?;

        Ok(QuestionSetListItem {
            difficulty: set_difficulty(&questions),
            tags: distinct_categories(&questions),
            question_set,
        })
    }
}
