//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the session's note collection.
//! - Keep storage details behind `NoteRepository` so a durable backend can
//!   replace the in-memory one without touching services.
//!
//! # Invariants
//! - `list` returns notes newest-first by creation; updates never reorder.
//! - Writes against unknown IDs return `RepoError::NotFound`.
//! - The repository never validates title/content; that is an editor rule.

use crate::model::note::{Note, NoteId, NotePatch};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(NoteId),
    /// `insert` was given a note whose ID is already stored.
    DuplicateId(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::DuplicateId(id) => write!(f, "note id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Creates a note with a fresh ID and returns it.
    fn create(&mut self, title: &str, content: &str) -> RepoResult<Note>;
    /// Stores a caller-built note at the front of the list.
    ///
    /// `create` goes through here with a fresh `Note`. An ID that is
    /// already stored is rejected with `RepoError::DuplicateId`.
    fn insert(&mut self, note: Note) -> RepoResult<Note>;
    /// Applies a partial update and returns the updated note.
    fn update(&mut self, id: NoteId, patch: NotePatch) -> RepoResult<Note>;
    /// Removes a note.
    fn delete(&mut self, id: NoteId) -> RepoResult<()>;
    /// Gets one note by ID.
    fn get(&self, id: NoteId) -> Option<Note>;
    /// Lists notes newest-first.
    fn list(&self) -> Vec<Note>;
    /// Number of stored notes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory note store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    // Newest note first.
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn create(&mut self, title: &str, content: &str) -> RepoResult<Note> {
        self.insert(Note::new(title, content))
    }

    fn insert(&mut self, note: Note) -> RepoResult<Note> {
        if self.position(note.id).is_some() {
            return Err(RepoError::DuplicateId(note.id));
        }
        debug!(
            "event=note_insert module=repo status=ok note_id={} total={}",
            note.id,
            self.notes.len() + 1
        );
        self.notes.insert(0, note.clone());
        Ok(note)
    }

    fn update(&mut self, id: NoteId, patch: NotePatch) -> RepoResult<Note> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let note = &mut self.notes[index];
        patch.apply_to(note);
        Ok(note.clone())
    }

    fn delete(&mut self, id: NoteId) -> RepoResult<()> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        self.notes.remove(index);
        debug!(
            "event=note_remove module=repo status=ok note_id={id} total={}",
            self.notes.len()
        );
        Ok(())
    }

    fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.id == id).cloned()
    }

    fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryNoteRepository, NoteRepository, RepoError};
    use crate::model::note::{Note, NotePatch};

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut repo = InMemoryNoteRepository::new();
        let note = Note::new("t", "c");
        repo.insert(note.clone()).unwrap();

        let err = repo.insert(note.clone()).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(note.id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn update_keeps_position_and_bumps_updated_at() {
        let mut repo = InMemoryNoteRepository::new();
        let first = repo.create("first", "one").unwrap();
        let second = repo.create("second", "two").unwrap();

        let updated = repo
            .update(first.id, NotePatch::text("first!", "one!"))
            .unwrap();
        assert!(updated.updated_at >= first.updated_at);

        let ids: Vec<_> = repo.list().into_iter().map(|note| note.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
