//! Domain Value Objects
//!
//! Immutable value types for the quiz domain.

/// Normalized difficulty of a question set, 0-100 for the 0-5 raw scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Difficulty(i32);

impl Difficulty {
    /// Raw 0-5 scale times 20 gives 0-100
    pub const SCALE: f64 = 20.0;
    pub const ZERO: Difficulty = Difficulty(0);

    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Scale a raw mean, truncating toward zero; no mean means 0
    pub fn from_mean(mean: Option<f64>) -> Self {
        match mean {
            Some(mean) => Self((mean * Self::SCALE).trunc() as i32),
            None => Self::ZERO,
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<Difficulty> for i32 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// Category label attached to a question; equal when titles are equal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    title: String,
}

impl Category {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
