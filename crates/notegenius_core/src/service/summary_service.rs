//! Delayed, cancellable summary generation.
//!
//! # Responsibility
//! - Choose the "analyzing" delay through an injectable `DelayPolicy`.
//! - Run wait-then-generate as a Tokio task that callers can cancel.
//!
//! # Invariants
//! - The generator itself runs synchronously once the delay elapses.
//! - A cancelled job never produces a summary.
//! - No retries; a failed or cancelled job is simply reported.

use crate::config::DelayConfig;
use crate::model::note::NoteId;
use crate::summary::generate;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Source of the wait applied before each summary.
pub trait DelayPolicy {
    fn next_delay(&mut self) -> Duration;
}

/// Uniformly random delay within inclusive millisecond bounds.
pub struct RandomDelay {
    rng: StdRng,
    min_ms: u64,
    max_ms: u64,
}

impl RandomDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self::with_rng(StdRng::from_entropy(), min, max)
    }

    /// Reproducible sequence for tests and demos.
    pub fn seeded(min: Duration, max: Duration, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), min, max)
    }

    pub fn from_config(config: &DelayConfig) -> Self {
        Self::new(config.min(), config.max())
    }

    fn with_rng(rng: StdRng, min: Duration, max: Duration) -> Self {
        let min_ms = duration_millis(min);
        let max_ms = duration_millis(max).max(min_ms);
        Self {
            rng,
            min_ms,
            max_ms,
        }
    }
}

impl Default for RandomDelay {
    /// Two to four seconds.
    fn default() -> Self {
        Self::from_config(&DelayConfig::default())
    }
}

impl DelayPolicy for RandomDelay {
    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(self.min_ms..=self.max_ms))
    }
}

/// Constant delay. `FixedDelay::zero()` makes jobs finish on first poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }
}

impl DelayPolicy for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

/// Final state of a summary job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Completed { note_id: NoteId, summary: String },
    Cancelled { note_id: NoteId },
}

impl SummaryOutcome {
    pub fn note_id(&self) -> NoteId {
        match self {
            Self::Completed { note_id, .. } | Self::Cancelled { note_id } => *note_id,
        }
    }
}

/// Failure to run a summary job to an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryJobError {
    /// `spawn` was called outside a Tokio runtime.
    NoRuntime,
    /// The task panicked or was aborted by the runtime.
    TaskFailed { note_id: NoteId, message: String },
}

impl Display for SummaryJobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime => write!(f, "summary job requires a running tokio runtime"),
            Self::TaskFailed { note_id, message } => {
                write!(f, "summary job for note {note_id} failed: {message}")
            }
        }
    }
}

impl Error for SummaryJobError {}

/// Handle to one in-flight summary request.
///
/// Dropping the handle before the job finishes cancels it.
#[derive(Debug)]
pub struct SummaryJob {
    note_id: NoteId,
    delay: Duration,
    cancel: CancellationToken,
    handle: JoinHandle<SummaryOutcome>,
}

impl SummaryJob {
    /// Spawns wait-then-generate for `content` on the current runtime.
    pub fn spawn(
        note_id: NoteId,
        content: String,
        delay: Duration,
    ) -> Result<Self, SummaryJobError> {
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| SummaryJobError::NoRuntime)?;
        let cancel = CancellationToken::new();
        let handle = runtime.spawn(run_job(note_id, content, delay, cancel.clone()));
        debug!(
            "event=summary_job_spawn module=service status=ok note_id={note_id} delay_ms={}",
            delay.as_millis()
        );
        Ok(Self {
            note_id,
            delay,
            cancel,
            handle,
        })
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stops the wait; the job resolves to `SummaryOutcome::Cancelled`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token that cancels this job, for handing to other owners.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the job to finish.
    pub async fn wait(mut self) -> Result<SummaryOutcome, SummaryJobError> {
        let note_id = self.note_id;
        (&mut self.handle).await.map_err(|err| {
            warn!("event=summary_job module=service status=error note_id={note_id}");
            SummaryJobError::TaskFailed {
                note_id,
                message: err.to_string(),
            }
        })
    }
}

impl Drop for SummaryJob {
    fn drop(&mut self) {
        if self.handle.is_finished() || self.cancel.is_cancelled() {
            return;
        }
        debug!(
            "event=summary_job_drop module=service status=cancelled note_id={}",
            self.note_id
        );
        self.cancel.cancel();
    }
}

async fn run_job(
    note_id: NoteId,
    content: String,
    delay: Duration,
    cancel: CancellationToken,
) -> SummaryOutcome {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            info!("event=summary_job module=service status=cancelled note_id={note_id}");
            SummaryOutcome::Cancelled { note_id }
        }
        () = tokio::time::sleep(delay) => {
            let summary = generate(&content);
            info!(
                "event=summary_job module=service status=ok note_id={note_id} summary_chars={}",
                summary.chars().count()
            );
            SummaryOutcome::Completed { note_id, summary }
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
