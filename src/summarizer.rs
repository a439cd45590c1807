//! Extractive summarizer.
//!
//! Splits a document on periods, scores every fragment by the document-local
//! frequency of its words, and keeps the highest scoring fragments in their
//! original order.

use crate::stopwords;
use crate::summary::Summary;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

/// Configuration for the summarizer
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Minimum input length in characters
    pub min_chars: usize,
    /// Number of sentences to keep
    pub max_sentences: usize,
    /// Multiplier for the first and last sentence
    pub position_boost: f64,
    /// Sentences with fewer words than this are penalized
    pub short_sentence_words: usize,
    /// Multiplier for short sentences
    pub short_sentence_penalty: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_chars: 50,
            max_sentences: 3,
            position_boost: 1.25,
            short_sentence_words: 4,
            short_sentence_penalty: 0.7,
        }
    }
}

/// A period-delimited fragment of the document with its score
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence<'a> {
    /// Fragment text, exactly as it appears between periods
    pub text: &'a str,
    /// 0-based position in the document
    pub index: usize,
    /// Relevance score
    pub score: f64,
}

/// Word counts scoped to a single document
#[derive(Debug, Default)]
pub struct TermFrequencies {
    counts: HashMap<String, usize>,
}

impl TermFrequencies {
    /// Count every word longer than three characters that is not a stop word
    pub fn from_fragments(fragments: &[&str]) -> Self {
        let mut counts = HashMap::new();
        for fragment in fragments {
            for word in fragment.to_lowercase().split_whitespace() {
                if is_counted(word) {
                    *counts.entry(word.to_string()).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Frequency of a lowercase word (0 when never counted)
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct counted words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no word was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn is_counted(word: &str) -> bool {
    word.chars().count() > 3 && !stopwords::is_stopword(word)
}

/// Split text on every period.
///
/// Empty fragments are kept so that ordinals line up with the raw split,
/// including the empty tail after a closing period.
pub fn segment(text: &str) -> Vec<&str> {
    text.split('.').collect()
}

/// Frequency-based extractive summarizer
#[derive(Debug, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a new summarizer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to keep
    pub fn with_max_sentences(mut self, n: usize) -> Self {
        self.config.max_sentences = n;
        self
    }

    /// Summarize a document
    pub fn summarize(&self, text: &str) -> Summary {
        if text.is_empty() || text.chars().count() < self.config.min_chars {
            return Summary::too_short();
        }

        let fragments = segment(text);
        debug!(fragments = fragments.len(), "segmented document");
        if fragments.len() <= self.config.max_sentences {
            return Summary::unchanged(text);
        }

        let frequencies = TermFrequencies::from_fragments(&fragments);
        let mut scored = self.score(&fragments, &frequencies);

        // Stable sort keeps scoring order among equal scores
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.config.max_sentences);
        scored.sort_by_key(|s| s.index);

        let selected: Vec<usize> = scored.iter().map(|s| s.index).collect();
        debug!(?selected, "selected sentences");

        let mut summary = scored
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(". ");
        summary.push('.');

        Summary::extracted(summary, selected)
    }

    /// Score every non-blank fragment, in document order
    pub fn score<'a>(
        &self,
        fragments: &[&'a str],
        frequencies: &TermFrequencies,
    ) -> Vec<Sentence<'a>> {
        let last = fragments.len().saturating_sub(1);

        fragments
            .iter()
            .enumerate()
            .filter(|(_, fragment)| !fragment.trim().is_empty())
            .map(|(index, &text)| {
                let lowered = text.to_lowercase();
                let words: Vec<&str> = lowered.split_whitespace().collect();
                let total: usize = words.iter().map(|w| frequencies.get(w)).sum();
                let mut score = total as f64 / words.len().max(1) as f64;

                if index == 0 || index == last {
                    score *= self.config.position_boost;
                }
                if words.len() < self.config.short_sentence_words {
                    score *= self.config.short_sentence_penalty;
                }

                Sentence { text, index, score }
            })
            .collect()
    }
}

/// Summarize with the default configuration, returning only the text
pub fn summarize(text: &str) -> String {
    Summarizer::new().summarize(text).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{SummaryKind, TOO_SHORT};

    const ARTICLE: &str = "Rust programming gives developers memory safety \
        without garbage collection. \
        The weather today is mild. \
        Rust programming relies on ownership and borrowing for memory safety. \
        Cats enjoy sleeping. \
        Many developers choose Rust programming for memory safety and speed";

    #[test]
    fn test_segment_keeps_empty_fragments() {
        assert_eq!(segment("One. Two."), vec!["One", " Two", ""]);
        assert_eq!(segment("a..b"), vec!["a", "", "b"]);
        assert_eq!(segment("no period"), vec!["no period"]);
    }

    #[test]
    fn test_frequencies_skip_short_and_stop_words() {
        let freqs = TermFrequencies::from_fragments(&["The cat sat about there", "Cats about"]);
        assert_eq!(freqs.get("cats"), 1);
        assert_eq!(freqs.get("cat"), 0);
        assert_eq!(freqs.get("about"), 0);
        assert_eq!(freqs.get("there"), 0);
        assert_eq!(freqs.len(), 1);
    }

    #[test]
    fn test_frequencies_are_case_insensitive() {
        let freqs = TermFrequencies::from_fragments(&["Memory memory MEMORY"]);
        assert_eq!(freqs.get("memory"), 3);
    }

    #[test]
    fn test_too_short() {
        let summarizer = Summarizer::new();
        assert_eq!(summarizer.summarize("").text, TOO_SHORT);
        assert_eq!(summarizer.summarize("Short. Text. Here. Now.").kind, SummaryKind::TooShort);
    }

    #[test]
    fn test_min_chars_counts_characters() {
        // 49 two-byte characters is still too short
        let text = "é".repeat(49);
        assert_eq!(summarize(&text), TOO_SHORT);
    }

    #[test]
    fn test_three_fragments_returned_unchanged() {
        let text = "This is a reasonably long first sentence. And here is the second one.";
        assert_eq!(segment(text).len(), 3);
        assert_eq!(summarize(text), text);
    }

    #[test]
    fn test_position_and_length_weights() {
        let summarizer = Summarizer::new();
        let fragments = ["alpha alpha", "alpha alpha", "alpha alpha alpha alpha"];
        let freqs = TermFrequencies::from_fragments(&fragments);
        let scored = summarizer.score(&fragments, &freqs);

        // alpha appears 8 times
        assert!((scored[0].score - 8.0 * 1.25 * 0.7).abs() < 1e-9);
        assert!((scored[1].score - 8.0 * 0.7).abs() < 1e-9);
        assert!((scored[2].score - 8.0 * 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_closing_period_moves_position_boost() {
        let summarizer = Summarizer::new();
        let text = "alpha first words here. other filler text. alpha last words here.";
        let fragments = segment(text);
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[3], "");

        let freqs = TermFrequencies::from_fragments(&fragments);
        let scored = summarizer.score(&fragments, &freqs);
        let indices: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        // The empty tail is the last index, so the final sentence gets no boost
        assert!((scored[0].score - 7.0 / 4.0 * 1.25).abs() < 1e-9);
        assert!((scored[1].score - 0.7).abs() < 1e-9);
        assert!((scored[2].score - 7.0 / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_closing_period_changes_selection() {
        let text = "Rust code ships very fast today. \
            Weather looks rather cloudy this morning. \
            Rust code rarely crashes under load. \
            Rust code compiles whole projects quickly. \
            Rust code runs well everywhere around here";

        let open = Summarizer::new().summarize(text);
        assert_eq!(open.selected, vec![0, 2, 4]);

        let closed = Summarizer::new().summarize(&format!("{}.", text));
        assert_eq!(closed.selected, vec![0, 2, 3]);
        assert_eq!(
            closed.text,
            concat!(
                "Rust code ships very fast today.",
                "  Rust code rarely crashes under load.",
                "  Rust code compiles whole projects quickly."
            )
        );
    }

    #[test]
    fn test_blank_fragments_not_scored() {
        let summarizer = Summarizer::new();
        let fragments = ["first words here now", "   ", "", "last words here now"];
        let freqs = TermFrequencies::from_fragments(&fragments);
        let scored = summarizer.score(&fragments, &freqs);
        let indices: Vec<usize> = scored.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_extracts_top_three_in_document_order() {
        let summary = Summarizer::new().summarize(ARTICLE);

        assert_eq!(summary.kind, SummaryKind::Extracted);
        assert_eq!(summary.selected, vec![0, 2, 4]);
        // Fragments keep their leading space, so joins produce two spaces
        assert_eq!(
            summary.text,
            concat!(
                "Rust programming gives developers memory safety without garbage collection.",
                "  Rust programming relies on ownership and borrowing for memory safety.",
                "  Many developers choose Rust programming for memory safety and speed."
            )
        );
    }

    #[test]
    fn test_ties_keep_scoring_order() {
        // Every fragment scores zero, so the first three win
        let text = "aa bb cc dd. ee ff gg hh. ii jj kk ll. mm nn oo pp. qq rr ss tt";
        let summary = Summarizer::new().summarize(text);
        assert_eq!(summary.selected, vec![0, 1, 2]);
        assert_eq!(summary.text, "aa bb cc dd.  ee ff gg hh.  ii jj kk ll.");
    }

    #[test]
    fn test_custom_sentence_count() {
        let summary = Summarizer::new().with_max_sentences(1).summarize(ARTICLE);
        assert_eq!(summary.selected.len(), 1);
        assert!(summary.text.ends_with('.'));
    }
}
