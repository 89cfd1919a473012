//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (QuestionSet, Question)
//! - Value objects (Difficulty, Category)
//! - Read views assembled per request (QuestionSetListItem, QuestionSetDetail)
//! - Domain services (difficulty and tag aggregation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
pub mod views;
