//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own the delayed summary trigger so view-models stay synchronous.

pub mod note_service;
pub mod summary_service;
