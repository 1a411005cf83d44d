//! Domain model for notes and their editor/session companions.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep editor buffers (`NoteDraft`) separate from stored notes.
//!
//! # Invariants
//! - Every note is identified by a stable, time-ordered `NoteId`.
//! - Non-empty title/content is an editor rule, not a `Note` rule.

pub mod note;
