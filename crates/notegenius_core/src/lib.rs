//! Core domain logic for NoteGenius.
//! This crate is the single source of truth for note and summary rules.

pub mod config;
pub mod import;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod summary;
pub mod workspace;

pub use config::{ConfigError, CoreConfig, DelayConfig};
pub use import::{import_text_file, ImportError, ImportedText};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::note::{Note, NoteDraft, NoteId, NotePatch, UserProfile};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_service::{validate_draft, NoteService, NoteServiceError};
pub use service::summary_service::{
    DelayPolicy, FixedDelay, RandomDelay, SummaryJob, SummaryJobError, SummaryOutcome,
};
pub use summary::{analyze, generate, LengthBracket, NoteStats, Outlook, SummaryAnalysis};
pub use workspace::{Dashboard, DashboardError, Session, SummaryView, Tab};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
