//! Heuristic sentence segmentation.
//!
//! The segmenter only needs to produce rough co-location units for the triple
//! detector, so it favors simplicity over grammatical exactness: whitespace
//! runs are collapsed, sentences break on terminal punctuation followed by a
//! capital letter, and short fragments (section headers, table scraps, stray
//! words) are discarded.

use std::sync::LazyLock;

use regex::Regex;

/// Fragments whose trimmed length is at or below this many characters are
/// dropped. Filters headers, table fragments, and stray single words.
pub const MIN_SENTENCE_LEN: usize = 15;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// Terminal punctuation followed by whitespace; a boundary only when the
/// next character is a capital letter (checked separately, since the `regex`
/// crate has no lookahead).
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern should be valid"));

/// A heuristic sentence segmenter.
///
/// Splits on `.`, `!`, or `?` followed by whitespace and a capital letter.
/// The punctuation is retained on the preceding sentence and the capital
/// letter is not consumed.
///
/// # Examples
///
/// ```
/// use polysift::segment::SentenceSegmenter;
///
/// let segmenter = SentenceSegmenter::new();
/// let sentences = segmenter.segment("The polymer melted at 210 K. The residue was discarded.");
///
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0], "The polymer melted at 210 K.");
/// assert_eq!(sentences[1], "The residue was discarded.");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Minimum trimmed length (exclusive) for a fragment to be kept.
    min_len: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter with the default minimum fragment length.
    pub fn new() -> Self {
        SentenceSegmenter {
            min_len: MIN_SENTENCE_LEN,
        }
    }

    /// Create a segmenter with a custom minimum fragment length.
    pub fn with_min_length(min_len: usize) -> Self {
        SentenceSegmenter { min_len }
    }

    /// Split `text` into candidate sentences.
    ///
    /// Returns an empty vector for empty input. Text with no sentence-ending
    /// punctuation yields at most one fragment.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let normalized = WHITESPACE_RUN.replace_all(text, " ");

        let mut sentences = Vec::new();
        let mut start = 0;

        for m in SENTENCE_BREAK.find_iter(&normalized) {
            let next_is_capital = normalized[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_uppercase());
            if !next_is_capital {
                continue;
            }

            // The punctuation char is ASCII, so +1 lands after it.
            self.push_fragment(&normalized[start..m.start() + 1], &mut sentences);
            start = m.end();
        }
        self.push_fragment(&normalized[start..], &mut sentences);

        sentences
    }

    fn push_fragment(&self, fragment: &str, sentences: &mut Vec<String>) {
        let trimmed = fragment.trim();
        if trimmed.chars().count() > self.min_len {
            sentences.push(trimmed.to_string());
        }
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_empty_text() {
        let segmenter = SentenceSegmenter::new();
        assert!(segmenter.segment("").is_empty());
    }

    #[test]
    fn test_segment_basic_sentences() {
        let segmenter = SentenceSegmenter::new();
        let sentences =
            segmenter.segment("The polymer was heated slowly. Then it was cooled to 25 °C.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The polymer was heated slowly.");
        assert_eq!(sentences[1], "Then it was cooled to 25 °C.");
    }

    #[test]
    fn test_segment_no_terminal_punctuation() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment("a fragment without any terminal punctuation at all");
        assert_eq!(sentences.len(), 1);

        // At most one fragment, kept only when long enough.
        let sentences = segmenter.segment("too short");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_segment_requires_capital_after_break() {
        let segmenter = SentenceSegmenter::new();
        // "e.g. the" has no capital after the period, so no split happens.
        let sentences =
            segmenter.segment("Several solvents were tested, e.g. toluene and chloroform.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_segment_drops_short_fragments() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment("Results. The glass transition was observed at 105 °C.");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], "The glass transition was observed at 105 °C.");
    }

    #[test]
    fn test_segment_normalizes_whitespace() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter.segment("The  sample\n\twas   heated gently.  Then it was cooled down.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The sample was heated gently.");
        assert_eq!(sentences[1], "Then it was cooled down.");
    }

    #[test]
    fn test_segment_question_and_exclamation() {
        let segmenter = SentenceSegmenter::new();
        let sentences = segmenter
            .segment("Could the blend be annealed further? Remarkably, the answer was yes!");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Could the blend be annealed further?");
    }

    #[test]
    fn test_custom_min_length() {
        let segmenter = SentenceSegmenter::with_min_length(3);
        let sentences = segmenter.segment("Results. The value rose.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Results.");
    }
}
