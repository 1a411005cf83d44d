//! Reading statistics shown next to a summary.

use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

/// Word count and estimated reading time for a note body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteStats {
    /// Non-empty pieces between single spaces.
    pub word_count: usize,
    /// `ceil(word_count / 200)`.
    pub reading_minutes: usize,
}

impl NoteStats {
    pub fn from_content(content: &str) -> Self {
        // Counted on single spaces only, so a newline-joined pair is one word.
        let word_count = content.split(' ').filter(|word| !word.is_empty()).count();
        Self {
            word_count,
            reading_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStats;

    #[test]
    fn empty_content_has_no_reading_time() {
        let stats = NoteStats::from_content("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.reading_minutes, 0);
    }

    #[test]
    fn reading_time_rounds_up() {
        let content = vec!["word"; 201].join(" ");
        let stats = NoteStats::from_content(&content);
        assert_eq!(stats.word_count, 201);
        assert_eq!(stats.reading_minutes, 2);
    }

    #[test]
    fn only_spaces_separate_words() {
        assert_eq!(NoteStats::from_content("one  two\nthree").word_count, 2);
    }
}
