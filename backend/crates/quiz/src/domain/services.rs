//! Domain Services
//!
//! Pure aggregation rules shared by the listing and detail use cases.

use crate::domain::entities::Question;
use crate::domain::value_objects::{Category, Difficulty};
use std::collections::HashSet;

/// Arithmetic mean of the rated raw difficulties
///
/// Unrated questions are skipped. `None` when nothing is rated, including
/// the empty set.
pub fn mean_difficulty(questions: &[Question]) -> Option<f64> {
    let (sum, count) = questions
        .iter()
        .filter_map(|q| q.difficulty)
        .fold((0u64, 0u64), |(sum, count), d| (sum + u64::from(d), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Normalized difficulty of a question set
pub fn set_difficulty(questions: &[Question]) -> Difficulty {
    Difficulty::from_mean(mean_difficulty(questions))
}

/// One category per distinct title, in first-seen order
pub fn distinct_categories(questions: &[Question]) -> Vec<Category> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .filter(|q| seen.insert(q.category.as_str()))
        .map(|q| Category::new(q.category.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::{QuestionId, QuestionSetId};

    fn question(id: i64, difficulty: Option<u8>, category: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            QuestionSetId::new(1),
            format!("Question {}", id),
            difficulty,
            category,
        )
    }

    #[test]
    fn test_mean_difficulty() {
        let questions = vec![
            question(1, Some(1), "math"),
            question(2, Some(2), "math"),
            question(3, Some(3), "science"),
        ];
        assert_eq!(mean_difficulty(&questions), Some(2.0));
        assert_eq!(set_difficulty(&questions).value(), 40);
    }

    #[test]
    fn test_mean_of_empty_is_none() {
        assert_eq!(mean_difficulty(&[]), None);
        assert_eq!(set_difficulty(&[]).value(), 0);
    }

    #[test]
    fn test_unrated_questions_are_skipped() {
        let questions = vec![question(1, None, "a"), question(2, Some(4), "a")];
        assert_eq!(mean_difficulty(&questions), Some(4.0));
        assert_eq!(set_difficulty(&questions).value(), 80);

        let unrated = vec![question(1, None, "a")];
        assert_eq!(set_difficulty(&unrated).value(), 0);
    }

    #[test]
    fn test_mean_truncates_after_scaling() {
        // mean 4/3 -> 26.66.. -> 26
        let questions = vec![
            question(1, Some(1), "a"),
            question(2, Some(1), "a"),
            question(3, Some(2), "a"),
        ];
        assert_eq!(set_difficulty(&questions).value(), 26);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let questions = vec![
            question(1, Some(1), "science"),
            question(2, Some(1), "math"),
            question(3, Some(1), "science"),
            question(4, Some(1), "history"),
            question(5, Some(1), "math"),
        ];
        let titles: Vec<_> = distinct_categories(&questions)
            .iter()
            .map(|c| c.title().to_string())
            .collect();
        assert_eq!(titles, vec!["science", "math", "history"]);
    }

    #[test]
    fn test_distinct_categories_empty() {
        assert!(distinct_categories(&[]).is_empty());
    }
}
