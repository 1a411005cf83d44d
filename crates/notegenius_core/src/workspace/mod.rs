//! Session and dashboard state owned by a single caller.
//!
//! # Responsibility
//! - Hold the mocked sign-in state and the signed-in user's dashboard.
//! - Track selection, active tab and the pending summary explicitly.
//!
//! # Invariants
//! - All state is mutated through `&mut self`; nothing is shared.
//! - Signing out drops every note.

pub mod dashboard;
pub mod session;

pub use dashboard::{Dashboard, DashboardError, SummaryView, Tab};
pub use session::Session;
