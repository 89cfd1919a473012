//! API DTOs (Data Transfer Objects)

use crate::domain::entities::{Question, QuestionSet};
use crate::domain::value_objects::{Category, Difficulty};
use crate::domain::views::{QuestionSetDetail, QuestionSetListItem};
use kernel::id::{QuestionId, QuestionSetId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetResponse {
    pub id: QuestionSetId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DifficultyResponse {
    pub value: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub question_set_id: QuestionSetId,
    pub text: String,
    pub difficulty: Option<u8>,
    pub category: String,
}

/// Element of the response for GET /api/v1/QuestionSet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetListItemResponse {
    pub question_set: QuestionSetResponse,
    pub difficulty: DifficultyResponse,
    pub tags: Vec<CategoryResponse>,
}

/// Response for GET /api/v1/QuestionSet/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetDetailResponse {
    pub question_set: QuestionSetResponse,
    pub questions: Vec<QuestionResponse>,
    pub difficulty: DifficultyResponse,
    pub tags: Vec<CategoryResponse>,
}

impl From<QuestionSet> for QuestionSetResponse {
    fn from(set: QuestionSet) -> Self {
        Self {
            id: set.id,
            title: set.title,
            description: set.description,
        }
    }
}

impl From<Difficulty> for DifficultyResponse {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            value: difficulty.value(),
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            title: category.title().to_string(),
        }
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question_set_id: question.question_set_id,
            text: question.text,
            difficulty: question.difficulty,
            category: question.category,
        }
    }
}

impl From<QuestionSetListItem> for QuestionSetListItemResponse {
    fn from(item: QuestionSetListItem) -> Self {
        Self {
            question_set: item.question_set.into(),
            difficulty: item.difficulty.into(),
            tags: item.tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<QuestionSetDetail> for QuestionSetDetailResponse {
    fn from(detail: QuestionSetDetail) -> Self {
        Self {
            question_set: detail.question_set.into(),
            questions: detail.questions.into_iter().map(Into::into).collect(),
            difficulty: detail.difficulty.into(),
            tags: detail.tags.into_iter().map(Into::into).collect(),
        }
    }
}
