//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) for unknown IDs.
//! - Only the in-memory backend exists; notes do not outlive the process.

pub mod note_repo;
