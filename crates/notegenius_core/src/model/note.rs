//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record kept by the in-memory store.
//! - Define the editor draft buffer and its import helper.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `summary` is `None` until generated; it is set at most once.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::import::ImportedText;

/// Stable identifier for a note.
///
/// UUID v7, so identifiers carry their creation time and sort by it.
pub type NoteId = Uuid;

const LIST_PREVIEW_CHARS: usize = 100;
const DETAIL_PREVIEW_CHARS: usize = 300;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Generated summary paragraph. Absent until generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh time-based ID and both timestamps at now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            content: content.into(),
            summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether a summary has already been generated for this note.
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    /// Short preview used by note lists.
    ///
    /// First 100 chars followed by `...`, always, mirroring the list cell.
    pub fn list_preview(&self) -> String {
        let mut preview: String = self.content.chars().take(LIST_PREVIEW_CHARS).collect();
        preview.push_str("...");
        preview
    }

    /// Longer preview shown next to the summary.
    ///
    /// `...` is appended only when the content was actually truncated.
    pub fn detail_preview(&self) -> String {
        let mut preview: String = self
            .content
            .chars()
            .take(DETAIL_PREVIEW_CHARS)
            .collect();
        if self.content.chars().count() > DETAIL_PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }
}

/// Partial update applied by the store.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
}

impl NotePatch {
    /// Patch replacing title and content, as the editor does on save.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            summary: None,
        }
    }

    /// Patch setting only the summary.
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Self::default()
        }
    }

    /// Applies this patch to `note` and refreshes `updated_at`.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(summary) = self.summary {
            note.summary = Some(summary);
        }
        note.updated_at = Utc::now().max(note.created_at);
    }
}

/// Editor buffer for creating or editing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Loads an existing note into the editor.
    pub fn from_note(note: &Note) -> Self {
        Self::new(note.title.clone(), note.content.clone())
    }

    /// Replaces content with an uploaded text file.
    ///
    /// The title is filled from the file name only when still blank.
    pub fn apply_import(&mut self, imported: ImportedText) {
        self.content = imported.content;
        if self.title.trim().is_empty() {
            self.title = imported.title_hint;
        }
    }
}

/// Signed-in user profile. Accepted as typed, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}
