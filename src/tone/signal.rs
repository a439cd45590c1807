//! Maps an external polarity/subjectivity signal to an emotion.

use super::{Emotion, ToneSignal, ToneStrategy};

/// Terms that mark neutral text as worried
const WORRY_INDICATORS: [&str; 6] = ["worry", "worried", "concern", "afraid", "fear", "anxious"];

/// Strategy used when a sentiment signal is available
#[derive(Debug, Clone, Copy)]
pub struct SignalStrategy {
    signal: ToneSignal,
}

impl SignalStrategy {
    pub fn new(signal: ToneSignal) -> Self {
        Self { signal }
    }
}

impl ToneStrategy for SignalStrategy {
    fn classify(&self, text: &str) -> Emotion {
        let ToneSignal {
            polarity,
            subjectivity,
        } = self.signal;

        if polarity > 0.5 {
            if subjectivity >= 0.6 {
                Emotion::Excited
            } else {
                Emotion::Happy
            }
        } else if polarity > 0.1 {
            Emotion::Happy
        } else if polarity < -0.5 {
            if text.contains('!') {
                Emotion::Angry
            } else {
                Emotion::Sad
            }
        } else if polarity < -0.1 {
            Emotion::Sad
        } else if text.matches('?').count() > 1 {
            Emotion::Confused
        } else {
            let lowered = text.to_lowercase();
            if WORRY_INDICATORS.iter().any(|w| lowered.contains(w)) {
                Emotion::Worried
            } else {
                Emotion::Neutral
            }
        }
    }

    fn name(&self) -> &'static str {
        "signal"
    }
}
