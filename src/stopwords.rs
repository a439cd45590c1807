//! Stop-word list used when counting term frequencies.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Words that carry no weight in a sentence score.
    static ref STOP_WORDS: HashSet<&'static str> = [
        "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "in", "on", "at", "to",
        "for", "with", "by", "about", "like", "from", "of", "that", "this", "there", "it", "as",
        "be", "been",
    ]
    .into_iter()
    .collect();
}

/// Check if a lowercase word is a stop word
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
