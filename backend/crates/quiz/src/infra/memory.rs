//! In-Memory Repository
//!
//! Serves question sets and questions from process memory. The store is
//! filled from a JSON seed fixture at startup, or built directly in tests.

use crate::domain::entities::{Question, QuestionSet};
use crate::domain::repository::{QuestionRepository, QuestionSetRepository};
use crate::error::{QuizError, QuizResult};
use kernel::id::{QuestionId, QuestionSetId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    question_sets: Vec<QuestionSet>,
    questions: Vec<Question>,
}

/// Repository backed by process memory
#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryQuizRepository {
    /// Build a store, rejecting questions whose set does not exist
    pub fn new(question_sets: Vec<QuestionSet>, questions: Vec<Question>) -> QuizResult<Self> {
        let mut set_ids = HashSet::with_capacity(question_sets.len());
        for set in &question_sets {
            if !set_ids.insert(set.id) {
                return Err(QuizError::Seed(format!(
                    "duplicate question set id {}",
                    set.id
                )));
            }
        }

        if let Some(orphan) = questions
            .iter()
            .find(|q| !set_ids.contains(&q.question_set_id))
        {
            return Err(QuizError::Seed(format!(
                "question {} references unknown question set {}",
                orphan.id, orphan.question_set_id
            )));
        }

        Ok(Self {
            store: Arc::new(RwLock::new(Store {
                question_sets,
                questions,
            })),
        })
    }

    /// Parse a seed fixture from JSON text
    pub fn from_json(json: &str) -> QuizResult<Self> {
        let seed: SeedFile = serde_json::from_str(json)?;
        seed.into_repository()
    }

    /// Load a seed fixture from disk
    pub async fn from_seed_file(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let repo = Self::from_json(&json)?;

        let store = repo.store.read().await;
        tracing::info!(
            path = %path.display(),
            question_sets = store.question_sets.len(),
            questions = store.questions.len(),
            "Loaded quiz seed"
        );
        drop(store);

        Ok(repo)
    }
}

impl QuestionSetRepository for InMemoryQuizRepository {
    async fn get_all(&self) -> QuizResult<Vec<QuestionSet>> {
        let store = self.store.read().await;
        Ok(store.question_sets.clone())
    }

    async fn find_by_id(&self, id: QuestionSetId) -> QuizResult<Option<QuestionSet>> {
        let store = self.store.read().await;
        Ok(store.question_sets.iter().find(|s| s.id == id).cloned())
    }
}

impl QuestionRepository for InMemoryQuizRepository {
    async fn get_questions_by_set_id(&self, id: QuestionSetId) -> QuizResult<Vec<Question>> {
        let store = self.store.read().await;
        Ok(store
            .questions
            .iter()
            .filter(|q| q.question_set_id == id)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Seed fixture
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedFile {
    #[serde(default)]
    question_sets: Vec<QuestionSetRow>,
    #[serde(default)]
    questions: Vec<QuestionRow>,
}

impl SeedFile {
    fn into_repository(self) -> QuizResult<InMemoryQuizRepository> {
        InMemoryQuizRepository::new(
            self.question_sets
                .into_iter()
                .map(QuestionSetRow::into_question_set)
                .collect(),
            self.questions
                .into_iter()
                .map(QuestionRow::into_question)
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionSetRow {
    id: i64,
    title: String,
    #[serde(default)]
    description: Option<String>,
}

impl QuestionSetRow {
    fn into_question_set(self) -> QuestionSet {
        QuestionSet {
            id: QuestionSetId::new(self.id),
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRow {
    id: i64,
    question_set_id: i64,
    text: String,
    #[serde(default)]
    difficulty: Option<u8>,
    category: String,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: QuestionId::new(self.id),
            question_set_id: QuestionSetId::new(self.question_set_id),
            text: self.text,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = r#"{
        "questionSets": [
            { "id": 2, "title": "Physics" },
            { "id": 1, "title": "Algebra", "description": "Linear equations" }
        ],
        "questions": [
            { "id": 10, "questionSetId": 1, "text": "2x = 4", "difficulty": 1, "category": "math" },
            { "id": 11, "questionSetId": 2, "text": "F = ?", "category": "science" }
        ]
    }"#;

    #[tokio::test]
    async fn test_seed_preserves_order() {
        let repo = InMemoryQuizRepository::from_json(SEED).unwrap();
        let ids: Vec<i64> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|s| s.id.value())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_questions_filtered_by_set() {
        let repo = InMemoryQuizRepository::from_json(SEED).unwrap();

        let questions = repo
            .get_questions_by_set_id(QuestionSetId::new(2))
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].difficulty, None);

        let none = repo
            .get_questions_by_set_id(QuestionSetId::new(99))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryQuizRepository::from_json(SEED).unwrap();

        let set = repo.find_by_id(QuestionSetId::new(1)).await.unwrap().unwrap();
        assert_eq!(set.description.as_deref(), Some("Linear equations"));
        assert!(repo.find_by_id(QuestionSetId::new(3)).await.unwrap().is_none());
    }

    #[test]
    fn test_orphan_question_rejected() {
        let json = r#"{
            "questionSets": [{ "id": 1, "title": "Only" }],
            "questions": [{ "id": 5, "questionSetId": 7, "text": "?", "category": "x" }]
        }"#;
        let err = InMemoryQuizRepository::from_json(json).err().unwrap();
        assert!(matches!(err, QuizError::Seed(msg) if msg.contains("unknown question set 7")));
    }

    #[test]
    fn test_duplicate_set_rejected() {
        let json = r#"{ "questionSets": [{ "id": 1, "title": "A" }, { "id": 1, "title": "B" }] }"#;
        assert!(matches!(
            InMemoryQuizRepository::from_json(json),
            Err(QuizError::Seed(_))
        ));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        assert!(matches!(
            InMemoryQuizRepository::from_json("{ nope"),
            Err(QuizError::Seed(_))
        ));
    }

    #[tokio::test]
    async fn test_bundled_seed_loads() {
        let repo =
            InMemoryQuizRepository::from_json(include_str!("../../../../../database/seed.json"))
                .unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_seed() {
        let repo = InMemoryQuizRepository::from_json("{}").unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
