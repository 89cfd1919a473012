//! Application Layer - Use Cases
//!
//! Each use case reports its outcome through an output port passed to
//! `execute`. Port callbacks consume the port, so one execution yields
//! exactly one outcome.

pub mod config;
pub mod get_question_set;
pub mod get_question_sets;
