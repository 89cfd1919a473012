//! Read Views
//!
//! Assembled per request from entities and discarded after the response.

use crate::domain::entities::{Question, QuestionSet};
use crate::domain::value_objects::{Category, Difficulty};

/// One entry of the question set listing
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSetListItem {
    pub question_set: QuestionSet,
    pub difficulty: Difficulty,
    /// Distinct by title, first-seen order
    pub tags: Vec<Category>,
}

/// A single question set with its questions
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSetDetail {
    pub question_set: QuestionSet,
    pub questions: Vec<Question>,
    pub difficulty: Difficulty,
    pub tags: Vec<Category>,
}
