//! Note use-case service.
//!
//! # Responsibility
//! - Apply editor rules (non-blank title and content) before writes.
//! - Attach generated summaries exactly once per note.
//! - Expose list/get/delete and reading statistics to callers.
//!
//! # Invariants
//! - Drafts are stored as typed; blank checks use the trimmed value.
//! - A note with a summary never gets a second one through this service.
//! - List order is delegated to the repository (newest-first).

use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::summary::NoteStats;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Draft title is empty or whitespace-only.
    EmptyTitle,
    /// Draft content is empty or whitespace-only.
    EmptyContent,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// The note already carries a generated summary.
    SummaryAlreadySet(NoteId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::SummaryAlreadySet(id) => write!(f, "note already summarized: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Checks the editor's submit precondition.
pub fn validate_draft(draft: &NoteDraft) -> Result<(), NoteServiceError> {
    if draft.title.trim().is_empty() {
        return Err(NoteServiceError::EmptyTitle);
    }
    if draft.content.trim().is_empty() {
        return Err(NoteServiceError::EmptyContent);
    }
    Ok(())
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note from a validated draft.
    pub fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, NoteServiceError> {
        validate_draft(draft)?;
        let note = self.repo.create(&draft.title, &draft.content)?;
        info!(
            "event=note_create module=service status=ok note_id={} chars={}",
            note.id,
            note.content.chars().count()
        );
        Ok(note)
    }

    /// Replaces title and content of an existing note.
    ///
    /// An existing summary is kept as-is even though it may now be stale.
    pub fn update_note(
        &mut self,
        id: NoteId,
        draft: &NoteDraft,
    ) -> Result<Note, NoteServiceError> {
        validate_draft(draft)?;
        let note = self
            .repo
            .update(id, NotePatch::text(draft.title.clone(), draft.content.clone()))?;
        info!("event=note_update module=service status=ok note_id={id}");
        Ok(note)
    }

    /// Stores a generated summary on a note that has none yet.
    pub fn attach_summary(
        &mut self,
        id: NoteId,
        summary: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let existing = self
            .repo
            .get(id)
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        if existing.has_summary() {
            return Err(NoteServiceError::SummaryAlreadySet(id));
        }
        let note = self.repo.update(id, NotePatch::summary(summary))?;
        info!("event=summary_attach module=service status=ok note_id={id}");
        Ok(note)
    }

    /// Deletes a note by ID.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete(id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(())
    }

    /// Gets one note by ID.
    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.repo.get(id)
    }

    /// Lists notes newest-first.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list()
    }

    pub fn note_count(&self) -> usize {
        self.repo.len()
    }

    /// Word count and reading time for one note.
    pub fn note_stats(&self, id: NoteId) -> Result<NoteStats, NoteServiceError> {
        self.repo
            .get(id)
            .map(|note| NoteStats::from_content(&note.content))
            .ok_or(NoteServiceError::NoteNotFound(id))
    }
}
