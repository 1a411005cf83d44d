//! Heuristic note summaries.
//!
//! # Responsibility
//! - Compute keyword and sentence statistics for a note body.
//! - Render the statistics into a brief/medium/comprehensive paragraph.
//!
//! # Invariants
//! - Summaries are deterministic: same content, same bytes.
//! - No I/O, randomness or clock access happens in this module.
//!
//! # See also
//! - `service::summary_service` for the delayed, cancellable trigger.

pub mod analysis;
pub mod generator;
pub mod stats;

pub use analysis::{analyze, LengthBracket, Outlook, RankedSentence, SummaryAnalysis, WordFrequency};
pub use generator::{generate, render};
pub use stats::NoteStats;
