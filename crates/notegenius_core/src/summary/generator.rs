//! Templated summary paragraph.
//!
//! # Responsibility
//! - Turn a `SummaryAnalysis` into one of three paragraph shapes.
//! - Normalize the final text (single spaces, one trailing period).
//!
//! # Invariants
//! - `generate` never panics and never returns an empty string.
//! - Output always ends with exactly one `.`.
//! - Missing themes/concepts interpolate as empty text.

use crate::summary::analysis::{analyze, LengthBracket, Outlook, RankedSentence, SummaryAnalysis};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^a-z]*").expect("valid leading non-letter regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Generates the summary paragraph for `content`.
pub fn generate(content: &str) -> String {
    render(&analyze(content))
}

/// Renders a summary from a precomputed analysis.
pub fn render(analysis: &SummaryAnalysis) -> String {
    let draft = match analysis.bracket {
        LengthBracket::Brief => render_brief(analysis),
        LengthBracket::Medium => render_medium(analysis),
        LengthBracket::Comprehensive => render_comprehensive(analysis),
    };
    finish(&draft)
}

fn render_brief(analysis: &SummaryAnalysis) -> String {
    let themes = &analysis.main_themes;
    let focus = if themes.len() > 2 {
        "key topics"
    } else {
        "the main focus"
    };
    let mut summary = format!(
        "This note explores {} as {focus}. ",
        join_slice(themes, 0, 2, " and ")
    );

    if let Some(top) = analysis.ranked_sentences.first() {
        if top.keyword_count > 0 {
            summary.push_str(&format!(
                "The primary insight is that {}. ",
                clean_sentence(&top.sentence)
            ));
        }
    }

    if !analysis.supporting_concepts.is_empty() {
        summary.push_str(&format!(
            "The discussion emphasizes {}.",
            join_slice(&analysis.supporting_concepts, 0, 2, " and ")
        ));
    }
    summary
}

fn render_medium(analysis: &SummaryAnalysis) -> String {
    let mut summary = format!(
        "This note examines {} and their interconnections. ",
        join_slice(&analysis.main_themes, 0, 3, ", ")
    );

    if let Some(first) = ranked_text(&analysis.ranked_sentences, 0) {
        summary.push_str(&format!("The central argument suggests that {first}. "));
    }
    if let Some(second) = ranked_text(&analysis.ranked_sentences, 1) {
        summary.push_str(&format!(
            "Supporting this, the note highlights how {second}. "
        ));
    }

    if let Some(conclusion) = analysis.conclusion_sentences.first() {
        summary.push_str(&format!(
            "The key takeaway emphasizes {}.",
            clean_sentence(conclusion)
        ));
    } else if analysis.supporting_concepts.len() > 2 {
        summary.push_str(&format!(
            "The analysis particularly focuses on {}.",
            join_slice(&analysis.supporting_concepts, 2, 4, " and ")
        ));
    }
    summary
}

fn render_comprehensive(analysis: &SummaryAnalysis) -> String {
    let mut summary = format!(
        "This comprehensive note provides an in-depth analysis of {}, examining multiple perspectives and implications. ",
        join_slice(&analysis.main_themes, 0, 3, ", ")
    );

    if let Some(first) = ranked_text(&analysis.ranked_sentences, 0) {
        summary.push_str(&format!(
            "The fundamental premise establishes that {first}, which serves as the foundation for further exploration. "
        ));
    }
    if let Some(second) = ranked_text(&analysis.ranked_sentences, 1) {
        summary.push_str(&format!(
            "The analysis develops this theme by demonstrating how {second}. "
        ));
    }

    let lead_theme = analysis
        .main_themes
        .first()
        .map(String::as_str)
        .unwrap_or("");
    match analysis.outlook {
        Outlook::Balanced => summary.push_str(&format!(
            "The note balances discussion of both opportunities and challenges in {lead_theme}, "
        )),
        Outlook::ChallengesOnly => summary.push_str(&format!(
            "Key challenges and concerns regarding {lead_theme} are thoroughly addressed, "
        )),
        Outlook::BenefitsOnly => summary.push_str(&format!(
            "The potential benefits and advantages of {lead_theme} are carefully examined, "
        )),
        Outlook::Neutral => {}
    }

    if let Some(conclusion) = analysis.conclusion_sentences.first() {
        summary.push_str(&format!(
            "ultimately concluding that {}.",
            clean_sentence(conclusion)
        ));
    } else if analysis.ranked_sentences.len() > 2 {
        summary.push_str(&format!(
            "with particular emphasis on {}.",
            join_slice(&analysis.supporting_concepts, 0, 2, " and ")
        ));
    }
    summary
}

fn ranked_text(ranked: &[RankedSentence], index: usize) -> Option<String> {
    ranked
        .get(index)
        .map(|entry| clean_sentence(&entry.sentence))
}

/// Lowercases, drops leading non-letters and one trailing period.
fn clean_sentence(sentence: &str) -> String {
    let lowered = sentence.to_lowercase();
    let stripped = LEADING_NON_LETTER_RE.replace(&lowered, "");
    stripped
        .strip_suffix('.')
        .unwrap_or(&*stripped)
        .to_string()
}

/// Joins `items[start..end]`, clamped to the available items.
fn join_slice(items: &[String], start: usize, end: usize, separator: &str) -> String {
    items
        .iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

fn finish(draft: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(draft, " ");
    let body = collapsed.trim_end_matches(|c: char| c == '.' || c.is_whitespace());
    format!("{}.", body.trim_start())
}
