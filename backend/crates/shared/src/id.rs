//! Typed Entity IDs
//!
//! Persisted rows are keyed by database integers. [`Id<T>`] keeps the raw
//! `i64` but tags it with a marker so a question ID can never be passed where
//! a question set ID is expected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type QuestionSetId = Id<markers::QuestionSet>;
/// let id = QuestionSetId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Database keys start at 1
    pub const fn is_valid(&self) -> bool {
        self.value > 0
    }
}

// Manual impls so the marker type needs no derives of its own.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for QuestionSet IDs
    pub struct QuestionSet;

    /// Marker for Question IDs
    pub struct Question;
}

pub type QuestionSetId = Id<markers::QuestionSet>;
pub type QuestionId = Id<markers::Question>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_value_roundtrip() {
        let id = QuestionSetId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(QuestionSetId::from(42), id);
    }

    #[test]
    fn test_id_validity() {
        assert!(QuestionId::new(1).is_valid());
        assert!(!QuestionId::new(0).is_valid());
        assert!(!QuestionId::new(-3).is_valid());
    }

    #[test]
    fn test_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&QuestionSetId::new(9)).unwrap();
        assert_eq!(json, "9");

        let id: QuestionId = serde_json::from_str("15").unwrap();
        assert_eq!(id.value(), 15);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(QuestionSetId::new(3).to_string(), "3");
        assert_eq!(format!("{:?}", QuestionSetId::new(3)), "Id(3)");
    }
}
