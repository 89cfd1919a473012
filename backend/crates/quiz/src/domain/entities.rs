//! Domain Entities
//!
//! Rows owned by the persistence layer. The quiz module only reads them.

use kernel::id::{QuestionId, QuestionSetId};

/// A named collection of quiz questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub id: QuestionSetId,
    pub title: String,
    pub description: Option<String>,
}

impl QuestionSet {
    pub fn new(id: QuestionSetId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A single question, belonging to exactly one question set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question_set_id: QuestionSetId,
    pub text: String,
    /// Raw difficulty on the 0-5 scale, `None` when unrated
    pub difficulty: Option<u8>,
    pub category: String,
}

impl Question {
    pub fn new(
        id: QuestionId,
        question_set_id: QuestionSetId,
        text: impl Into<String>,
        difficulty: Option<u8>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question_set_id,
            text: text.into(),
            difficulty,
            category: category.into(),
        }
    }
}
