//! Presentation Layer
//!
//! Presenters (use case output ports rendered as HTTP), handlers, DTOs.

pub mod dto;
pub mod handlers;
pub mod presenters;
pub mod router;
