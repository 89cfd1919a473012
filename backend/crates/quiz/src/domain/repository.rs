//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entities::{Question, QuestionSet};
use crate::error::QuizResult;
use kernel::id::QuestionSetId;

/// QuestionSet repository trait
#[trait_variant::make(QuestionSetRepository: Send)]
pub trait LocalQuestionSetRepository {
    /// All question sets in storage order; empty when there are none
    async fn get_all(&self) -> QuizResult<Vec<QuestionSet>>;

    async fn find_by_id(&self, id: QuestionSetId) -> QuizResult<Option<QuestionSet>>;
}

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Questions of one set, possibly empty
    async fn get_questions_by_set_id(&self, id: QuestionSetId) -> QuizResult<Vec<Question>>;
}
