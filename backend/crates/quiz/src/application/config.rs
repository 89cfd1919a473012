//! Application Configuration
//!
//! Configuration for the quiz application layer.

/// Quiz application configuration
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Fetch the questions of every listed set concurrently.
    /// Listing order is the repository order either way.
    pub concurrent_question_fetch: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            concurrent_question_fetch: true,
        }
    }
}

impl QuizConfig {
    /// One question fetch at a time, in listing order
    pub fn sequential() -> Self {
        Self {
            concurrent_question_fetch: false,
        }
    }
}
