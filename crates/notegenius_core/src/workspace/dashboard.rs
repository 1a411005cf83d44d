//! Dashboard view-model.
//!
//! # Responsibility
//! - Own the note service plus navigation state (selection, tab, editor mode).
//! - Gate summary generation: one pending job, only for unsummarized notes.
//! - Apply finished summary jobs back onto the store.
//!
//! # Invariants
//! - `Tab::Summary` is only active while a note is selected.
//! - A pending summary blocks further requests until its outcome is
//!   applied, it fails, or its job is cancelled or dropped.
//! - A summarized note never offers generation again.

use crate::model::note::{Note, NoteDraft, NoteId, UserProfile};
use crate::repo::note_repo::{InMemoryNoteRepository, NoteRepository};
use crate::service::note_service::{NoteService, NoteServiceError};
use crate::service::summary_service::{DelayPolicy, SummaryJob, SummaryJobError, SummaryOutcome};
use crate::summary::NoteStats;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio_util::sync::CancellationToken;

/// Main content area shown next to the note list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Notes,
    Editor,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The action needs a selected note.
    NoSelection,
    /// The selected note already has a summary.
    AlreadySummarized(NoteId),
    /// A summary job is still running.
    SummaryPending(NoteId),
    Note(NoteServiceError),
    Job(SummaryJobError),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no note selected"),
            Self::AlreadySummarized(id) => write!(f, "note already summarized: {id}"),
            Self::SummaryPending(id) => write!(f, "summary already pending for note {id}"),
            Self::Note(err) => write!(f, "{err}"),
            Self::Job(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Note(err) => Some(err),
            Self::Job(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NoteServiceError> for DashboardError {
    fn from(value: NoteServiceError) -> Self {
        Self::Note(value)
    }
}

impl From<SummaryJobError> for DashboardError {
    fn from(value: SummaryJobError) -> Self {
        Self::Job(value)
    }
}

/// Everything the summary panel renders for the selected note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub note_id: NoteId,
    pub title: String,
    pub stats: NoteStats,
    /// First 300 chars of content.
    pub preview: String,
    pub summary: Option<String>,
    /// Whether the "generate" control is offered at all.
    pub can_generate: bool,
    /// Whether a job for this note is running (control disabled).
    pub is_generating: bool,
}

/// Job the dashboard is waiting on. Stale once its token is cancelled.
#[derive(Debug)]
struct PendingSummary {
    note_id: NoteId,
    cancel: CancellationToken,
}

impl PendingSummary {
    fn is_live(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

/// Signed-in user's workspace.
pub struct Dashboard<R: NoteRepository = InMemoryNoteRepository> {
    user: UserProfile,
    notes: NoteService<R>,
    selected: Option<NoteId>,
    active_tab: Tab,
    is_creating: bool,
    pending_summary: Option<PendingSummary>,
}

impl Dashboard<InMemoryNoteRepository> {
    /// Empty in-memory dashboard for `user`.
    pub fn new(user: UserProfile) -> Self {
        Self::with_repository(user, InMemoryNoteRepository::new())
    }
}

impl<R: NoteRepository> Dashboard<R> {
    pub fn with_repository(user: UserProfile, repo: R) -> Self {
        Self {
            user,
            notes: NoteService::new(repo),
            selected: None,
            active_tab: Tab::Notes,
            is_creating: false,
            pending_summary: None,
        }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn selected_note(&self) -> Option<Note> {
        self.selected.and_then(|id| self.notes.get_note(id))
    }

    /// Note whose summary job is still live.
    pub fn pending_summary(&self) -> Option<NoteId> {
        self.pending_summary
            .as_ref()
            .filter(|pending| pending.is_live())
            .map(|pending| pending.note_id)
    }

    /// Notes newest-first.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.list_notes()
    }

    pub fn note_count(&self) -> usize {
        self.notes.note_count()
    }

    /// Opens the editor on a blank draft.
    pub fn start_new_note(&mut self) {
        self.is_creating = true;
        self.active_tab = Tab::Editor;
    }

    /// What the editor shows: blank when creating, else the selected note.
    pub fn editor_draft(&self) -> NoteDraft {
        if self.is_creating {
            return NoteDraft::default();
        }
        self.selected_note()
            .map(|note| NoteDraft::from_note(&note))
            .unwrap_or_default()
    }

    /// Selects a note from the list and shows its summary panel.
    pub fn select_note(&mut self, id: NoteId) -> Result<(), DashboardError> {
        if self.notes.get_note(id).is_none() {
            return Err(NoteServiceError::NoteNotFound(id).into());
        }
        self.selected = Some(id);
        self.is_creating = false;
        self.active_tab = Tab::Summary;
        Ok(())
    }

    /// Switches tabs. The summary tab needs a selection.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), DashboardError> {
        if tab == Tab::Summary && self.selected.is_none() {
            return Err(DashboardError::NoSelection);
        }
        self.active_tab = tab;
        Ok(())
    }

    /// Submits the editor.
    ///
    /// Creates a note when in creating mode (or nothing is selected),
    /// otherwise updates the selected note. New notes become selected and the
    /// summary tab opens.
    pub fn save_draft(&mut self, draft: &NoteDraft) -> Result<Note, DashboardError> {
        match self.selected.filter(|_| !self.is_creating) {
            Some(id) => Ok(self.notes.update_note(id, draft)?),
            None => {
                let note = self.notes.create_note(draft)?;
                self.selected = Some(note.id);
                self.is_creating = false;
                self.active_tab = Tab::Summary;
                Ok(note)
            }
        }
    }

    /// Leaves the editor without saving.
    pub fn cancel_edit(&mut self) {
        self.is_creating = false;
        self.active_tab = if self.selected.is_some() {
            Tab::Summary
        } else {
            Tab::Notes
        };
    }

    /// Deletes a note; deleting the selected one returns to the list.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), DashboardError> {
        self.notes.delete_note(id)?;
        if self.selected == Some(id) {
            self.selected = None;
            self.active_tab = Tab::Notes;
        }
        Ok(())
    }

    /// Starts summarizing the selected note after a policy-chosen delay.
    ///
    /// Must be called inside a Tokio runtime. Hand the job to
    /// [`Dashboard::finish_summary`], or apply its outcome through
    /// [`Dashboard::apply_summary_outcome`].
    pub fn request_summary(
        &mut self,
        delay: &mut impl DelayPolicy,
    ) -> Result<SummaryJob, DashboardError> {
        if let Some(pending) = self.pending_summary() {
            return Err(DashboardError::SummaryPending(pending));
        }
        let note = self.selected_note().ok_or(DashboardError::NoSelection)?;
        if note.has_summary() {
            return Err(DashboardError::AlreadySummarized(note.id));
        }

        let job = SummaryJob::spawn(note.id, note.content, delay.next_delay())?;
        self.pending_summary = Some(PendingSummary {
            note_id: job.note_id(),
            cancel: job.cancellation_token(),
        });
        info!(
            "event=summary_request module=dashboard status=pending note_id={} delay_ms={}",
            job.note_id(),
            job.delay().as_millis()
        );
        Ok(job)
    }

    /// Awaits `job` and applies its outcome.
    ///
    /// A failed job releases the pending slot before its error is returned.
    pub async fn finish_summary(
        &mut self,
        job: SummaryJob,
    ) -> Result<Option<Note>, DashboardError> {
        let note_id = job.note_id();
        match job.wait().await {
            Ok(outcome) => self.apply_summary_outcome(outcome),
            Err(err) => {
                self.release_pending(note_id);
                warn!("event=summary_apply module=dashboard status=error note_id={note_id}");
                Err(err.into())
            }
        }
    }

    /// Cancels the pending job, if any, and frees the slot for a new request.
    pub fn abandon_summary(&mut self) -> Option<NoteId> {
        let pending = self.pending_summary.take()?;
        pending.cancel.cancel();
        info!(
            "event=summary_abandon module=dashboard status=ok note_id={}",
            pending.note_id
        );
        Some(pending.note_id)
    }

    /// Records a finished job.
    ///
    /// Returns the updated note on completion, `None` when the job was
    /// cancelled, or its note was deleted or summarized meanwhile.
    pub fn apply_summary_outcome(
        &mut self,
        outcome: SummaryOutcome,
    ) -> Result<Option<Note>, DashboardError> {
        match outcome {
            SummaryOutcome::Cancelled { note_id } => {
                // A live slot here belongs to a newer request for the same note.
                if self.pending_summary.as_ref().is_some_and(|p| !p.is_live()) {
                    self.release_pending(note_id);
                }
                Ok(None)
            }
            SummaryOutcome::Completed { note_id, summary } => {
                self.release_pending(note_id);
                match self.notes.get_note(note_id) {
                    Some(note) if !note.has_summary() => {
                        Ok(Some(self.notes.attach_summary(note_id, summary)?))
                    }
                    _ => {
                        debug!(
                            "event=summary_apply module=dashboard status=skipped note_id={note_id}"
                        );
                        Ok(None)
                    }
                }
            }
        }
    }

    fn release_pending(&mut self, note_id: NoteId) {
        if self
            .pending_summary
            .as_ref()
            .is_some_and(|pending| pending.note_id == note_id)
        {
            self.pending_summary = None;
        }
    }

    /// Summary panel state for the selected note.
    pub fn summary_view(&self) -> Option<SummaryView> {
        let note = self.selected_note()?;
        let is_generating = self.pending_summary() == Some(note.id);
        Some(SummaryView {
            note_id: note.id,
            stats: NoteStats::from_content(&note.content),
            preview: note.detail_preview(),
            can_generate: !note.has_summary(),
            is_generating,
            title: note.title,
            summary: note.summary,
        })
    }
}
