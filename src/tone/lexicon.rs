//! Lexicon-based tone scoring.

use super::{Emotion, ToneStrategy};
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref HAPPY_WORDS: Vec<&'static str> = vec![
        "happy", "joy", "joyful", "delighted", "excited", "glad", "pleased", "thrilled",
        "wonderful", "amazing", "great", "good", "love", "like", "enjoy", "fantastic",
        "excellent", "awesome", "smile", "laugh", "fun", "celebrate", "congratulations",
        "perfect", "beautiful", "best",
    ];
    static ref SAD_WORDS: Vec<&'static str> = vec![
        "sad", "unhappy", "depressed", "depression", "miserable", "heartbroken", "disappointed",
        "upset", "terrible", "awful", "horrible", "hate", "dislike", "sorry", "regret", "cry",
        "tears", "grief", "mourn", "miss", "lost", "alone", "lonely", "unfortunate", "tragic",
        "failed", "failure", "passed away", "died",
    ];
    static ref ANGRY_WORDS: Vec<&'static str> = vec![
        "angry", "mad", "furious", "annoyed", "irritated", "frustrated", "rage", "hate",
        "outraged", "disgusted", "bitter", "hostile", "offended", "resent", "damn", "hell",
        "stupid", "idiot", "fool", "ridiculous", "unfair", "wrong",
    ];
    static ref WORRIED_WORDS: Vec<&'static str> = vec![
        "worry", "worried", "anxious", "anxiety", "nervous", "stress", "stressed", "concern",
        "concerned", "afraid", "fear", "scared", "frightened", "panic", "uneasy", "tense",
        "apprehensive", "dread", "doubt", "uncertain",
    ];
    static ref CONFUSED_WORDS: Vec<&'static str> = vec![
        "confused", "confusing", "confusion", "puzzled", "perplexed", "unsure", "uncertain",
        "doubt", "wondering", "wonder", "understand", "complicated",
    ];
}

const BEREAVEMENT_PHRASES: [&str; 2] = ["my mother passed away", "my father passed away"];
const PRAISE_PHRASES: [&str; 2] = ["congratulations", "well done"];
const BEREAVEMENT_BOOST: usize = 5;
const PRAISE_BOOST: usize = 3;

/// Per-category counts for one classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneTally {
    pub happy: usize,
    pub sad: usize,
    pub angry: usize,
    pub worried: usize,
    pub confused: usize,
    pub exclamations: usize,
    pub questions: usize,
}

impl ToneTally {
    /// Highest category count
    pub fn max(&self) -> usize {
        self.happy
            .max(self.sad)
            .max(self.angry)
            .max(self.worried)
            .max(self.confused)
    }

    /// Pick the winning emotion. Ties go to the earlier category:
    /// happy, sad, angry, worried, confused.
    pub fn winner(&self) -> Emotion {
        let max = self.max();
        if max == 0 {
            Emotion::Neutral
        } else if self.happy == max {
            if self.exclamations > 1 {
                Emotion::Excited
            } else {
                Emotion::Happy
            }
        } else if self.sad == max {
            Emotion::Sad
        } else if self.angry == max {
            Emotion::Angry
        } else if self.worried == max {
            Emotion::Worried
        } else {
            Emotion::Confused
        }
    }
}

fn count_terms(terms: &[&str], lowered: &str) -> usize {
    terms.iter().filter(|term| lowered.contains(**term)).count()
}

/// Strategy used when no sentiment signal is available
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconStrategy;

impl LexiconStrategy {
    /// Count lexicon hits, punctuation and phrase boosts for `text`
    pub fn tally(&self, text: &str) -> ToneTally {
        let lowered = text.to_lowercase();

        let mut tally = ToneTally {
            happy: count_terms(&HAPPY_WORDS, &lowered),
            sad: count_terms(&SAD_WORDS, &lowered),
            angry: count_terms(&ANGRY_WORDS, &lowered),
            worried: count_terms(&WORRIED_WORDS, &lowered),
            confused: count_terms(&CONFUSED_WORDS, &lowered),
            exclamations: text.matches('!').count(),
            questions: text.matches('?').count(),
        };

        if tally.exclamations > 1 {
            if tally.angry > 0 {
                tally.angry += tally.exclamations;
            } else {
                tally.happy += tally.exclamations;
            }
        }
        if tally.questions > 1 {
            tally.confused += tally.questions;
        }

        if BEREAVEMENT_PHRASES.iter().any(|p| lowered.contains(p)) {
            tally.sad += BEREAVEMENT_BOOST;
        }
        if PRAISE_PHRASES.iter().any(|p| lowered.contains(p)) {
            tally.happy += PRAISE_BOOST;
        }

        debug!(?tally, "lexicon tally");
        tally
    }
}

impl ToneStrategy for LexiconStrategy {
    fn classify(&self, text: &str) -> Emotion {
        self.tally(text).winner()
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Emotion {
        LexiconStrategy.classify(text)
    }

    #[test]
    fn test_exclamations_tip_happy_to_excited() {
        assert_eq!(classify("I am so happy and thrilled today!!!"), Emotion::Excited);
        assert_eq!(classify("I am so happy and thrilled today!"), Emotion::Happy);
    }

    #[test]
    fn test_bereavement_phrase() {
        let tally = LexiconStrategy.tally("My father passed away yesterday.");
        assert_eq!(tally.sad, 6);
        assert_eq!(tally.winner(), Emotion::Sad);
    }

    #[test]
    fn test_questions_boost_confused() {
        let tally = LexiconStrategy.tally("What is this? Why? How? Who?");
        assert_eq!(tally.questions, 4);
        assert_eq!(tally.confused, 4);
        assert_eq!(tally.winner(), Emotion::Confused);
    }

    #[test]
    fn test_exclamations_feed_anger_when_present() {
        let tally = LexiconStrategy.tally("This is so unfair!!");
        assert_eq!(tally.angry, 3);
        assert_eq!(tally.happy, 0);
        assert_eq!(tally.winner(), Emotion::Angry);
    }

    #[test]
    fn test_substring_matches_count() {
        // "fun" inside "refund", "like" inside "unlikely"
        let tally = LexiconStrategy.tally("A refund is unlikely");
        assert_eq!(tally.happy, 2);
    }

    #[test]
    fn test_each_term_counts_once() {
        let tally = LexiconStrategy.tally("sad sad sad sad");
        assert_eq!(tally.sad, 1);
    }

    #[test]
    fn test_praise_phrase() {
        let tally = LexiconStrategy.tally("Well done on the release");
        assert_eq!(tally.happy, 3);
        assert_eq!(tally.winner(), Emotion::Happy);
    }

    #[test]
    fn test_worried_terms() {
        assert_eq!(classify("I feel nervous and scared"), Emotion::Worried);
    }

    #[test]
    fn test_tie_break_order() {
        let tally = ToneTally {
            sad: 2,
            angry: 2,
            worried: 2,
            ..Default::default()
        };
        assert_eq!(tally.winner(), Emotion::Sad);

        let tally = ToneTally {
            worried: 1,
            confused: 1,
            ..Default::default()
        };
        assert_eq!(tally.winner(), Emotion::Worried);

        let tally = ToneTally {
            happy: 1,
            sad: 1,
            exclamations: 2,
            ..Default::default()
        };
        assert_eq!(tally.winner(), Emotion::Excited);
    }

    #[test]
    fn test_no_signal_is_neutral() {
        assert_eq!(classify("The train leaves at noon from platform nine."), Emotion::Neutral);
        assert_eq!(ToneTally::default().winner(), Emotion::Neutral);
    }
}
