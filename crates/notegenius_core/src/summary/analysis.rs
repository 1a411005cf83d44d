//! Text statistics behind the summary templates.
//!
//! # Responsibility
//! - Split content into candidate sentences and lowercase word tokens.
//! - Rank keywords by frequency and sentences by keyword density.
//! - Detect conclusion sentences and challenge/benefit vocabulary.
//!
//! # Invariants
//! - Every function here is pure and total over any input string.
//! - Frequency ties keep first-occurrence order; sentence score ties keep
//!   document order.
//! - Lengths are measured in chars, never bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence break regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Fragments at or below this many chars (after trim) are not sentences.
pub const MIN_SENTENCE_CHARS: usize = 10;
/// Tokens at or below this many chars never become keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;
/// Number of keywords retained after frequency ranking.
pub const KEYWORD_LIMIT: usize = 8;

const MAIN_THEME_COUNT: usize = 3;
const SUPPORTING_CONCEPT_COUNT: usize = 3;
const CONCLUSION_WINDOW: usize = 2;
const BRIEF_WORD_LIMIT: usize = 100;
const MEDIUM_WORD_LIMIT: usize = 400;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it",
    "we", "they", "can", "may", "might", "must", "also", "very", "more", "most", "some", "any",
    "all", "each", "every", "when", "where", "why", "how", "what", "which",
];

const CONCLUSION_MARKERS: &[&str] = &[
    "therefore",
    "conclusion",
    "result",
    "finally",
    "overall",
    "important",
];

const CHALLENGE_WORDS: &[&str] = &[
    "challenge",
    "problem",
    "issue",
    "concern",
    "difficulty",
    "limitation",
];

const BENEFIT_WORDS: &[&str] = &[
    "benefit",
    "advantage",
    "opportunity",
    "improvement",
    "success",
    "effective",
];

/// Template family selected by the total word count of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBracket {
    /// Fewer than 100 words.
    Brief,
    /// 100 to 399 words.
    Medium,
    /// 400 words or more.
    Comprehensive,
}

impl LengthBracket {
    pub fn for_word_count(word_count: usize) -> Self {
        if word_count < BRIEF_WORD_LIMIT {
            Self::Brief
        } else if word_count < MEDIUM_WORD_LIMIT {
            Self::Medium
        } else {
            Self::Comprehensive
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Medium => "medium",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// Which of the challenge/benefit vocabularies appear in a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Balanced,
    ChallengesOnly,
    BenefitsOnly,
    Neutral,
}

impl Outlook {
    fn from_tokens(tokens: &[String]) -> Self {
        let has_challenges = tokens
            .iter()
            .any(|token| CHALLENGE_WORDS.contains(&token.as_str()));
        let has_benefits = tokens
            .iter()
            .any(|token| BENEFIT_WORDS.contains(&token.as_str()));
        match (has_challenges, has_benefits) {
            (true, true) => Self::Balanced,
            (true, false) => Self::ChallengesOnly,
            (false, true) => Self::BenefitsOnly,
            (false, false) => Self::Neutral,
        }
    }
}

/// Token -> count mapping in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    entries: Vec<(String, usize)>,
}

impl WordFrequency {
    /// Counts keyword candidates among `tokens`.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a String>) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();
        for token in tokens {
            if !is_keyword_candidate(token) {
                continue;
            }
            match index.get(token.as_str()) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(token.as_str(), entries.len());
                    entries.push((token.clone(), 1));
                }
            }
        }
        Self { entries }
    }

    pub fn count(&self, token: &str) -> usize {
        self.entries
            .iter()
            .find(|(word, _)| word == token)
            .map_or(0, |(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the `limit` most frequent tokens, ties in first-seen order.
    pub fn top(&self, limit: usize) -> Vec<String> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

/// A sentence scored by the share of its words that are keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// Trimmed sentence text, terminator removed.
    pub sentence: String,
    pub score: f64,
    pub keyword_count: usize,
}

/// Every intermediate the templates draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryAnalysis {
    /// Total whitespace-split token count of the content.
    pub word_count: usize,
    /// Retained sentences in document order (untrimmed).
    pub sentences: Vec<String>,
    pub key_words: Vec<String>,
    pub ranked_sentences: Vec<RankedSentence>,
    pub main_themes: Vec<String>,
    pub supporting_concepts: Vec<String>,
    pub conclusion_sentences: Vec<String>,
    pub bracket: LengthBracket,
    pub outlook: Outlook,
}

/// Runs the full text analysis over `content`.
pub fn analyze(content: &str) -> SummaryAnalysis {
    let sentences = split_sentences(content);
    let tokens = tokenize(content);
    let key_words = WordFrequency::from_tokens(&tokens).top(KEYWORD_LIMIT);
    let ranked_sentences = rank_sentences(&sentences, &key_words);

    let main_themes: Vec<String> = key_words.iter().take(MAIN_THEME_COUNT).cloned().collect();
    let supporting_concepts: Vec<String> = key_words
        .iter()
        .skip(MAIN_THEME_COUNT)
        .take(SUPPORTING_CONCEPT_COUNT)
        .cloned()
        .collect();
    let conclusion_sentences = find_conclusions(&sentences);

    SummaryAnalysis {
        word_count: tokens.len(),
        bracket: LengthBracket::for_word_count(tokens.len()),
        outlook: Outlook::from_tokens(&tokens),
        sentences,
        key_words,
        ranked_sentences,
        main_themes,
        supporting_concepts,
        conclusion_sentences,
    }
}

/// Splits on runs of `.`, `!`, `?` and keeps real sentences.
///
/// Dropped: fragments of at most 10 chars after trim, and fragments whose
/// every word is made of ASCII digits. Kept fragments are not trimmed.
pub fn split_sentences(content: &str) -> Vec<String> {
    SENTENCE_BREAK_RE
        .split(content)
        .filter(|fragment| fragment.trim().chars().count() > MIN_SENTENCE_CHARS)
        .filter(|fragment| !is_numeric_fragment(fragment))
        .map(str::to_string)
        .collect()
}

/// Lowercases and splits on whitespace runs.
///
/// Leading/trailing whitespace yields empty tokens, so empty content is
/// one (empty) token.
pub fn tokenize(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    WHITESPACE_RE
        .split(&lowered)
        .map(str::to_string)
        .collect()
}

/// Returns whether a lowercase token may be counted as a keyword.
pub fn is_keyword_candidate(token: &str) -> bool {
    token.chars().count() > MIN_KEYWORD_CHARS
        && !STOP_WORDS.contains(&token)
        && !is_ascii_number(token)
}

/// Scores each sentence by keyword density and sorts best-first.
pub fn rank_sentences(sentences: &[String], key_words: &[String]) -> Vec<RankedSentence> {
    let mut ranked: Vec<RankedSentence> = sentences
        .iter()
        .map(|sentence| {
            let words = tokenize(sentence);
            let keyword_count = words
                .iter()
                .filter(|word| key_words.contains(*word))
                .count();
            let score = if words.is_empty() {
                0.0
            } else {
                keyword_count as f64 / words.len() as f64
            };
            RankedSentence {
                sentence: sentence.trim().to_string(),
                score,
                keyword_count,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Picks conclusion-like sentences among the final two.
pub fn find_conclusions(sentences: &[String]) -> Vec<String> {
    let window_start = sentences.len().saturating_sub(CONCLUSION_WINDOW);
    sentences[window_start..]
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            CONCLUSION_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker))
        })
        .cloned()
        .collect()
}

fn is_ascii_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_numeric_fragment(fragment: &str) -> bool {
    let mut words = fragment.split_whitespace().peekable();
    words.peek().is_some() && words.all(is_ascii_number)
}
