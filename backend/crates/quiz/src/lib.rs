//! Quiz (Question Bank) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, aggregation rules, repository traits
//! - `application/` - Use cases and their output ports
//! - `infra/` - Repository implementations
//! - `presentation/` - Presenters, HTTP handlers, DTOs, router
//!
//! ## Request flow
//! Handler builds the use case input and a fresh presenter, the use case
//! queries the repositories and reports through exactly one presenter
//! callback, and the handler returns the presenter's response.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::QuizConfig;
pub use error::{QuizError, QuizResult};
pub use infra::memory::InMemoryQuizRepository;
pub use presentation::router::quiz_router;
