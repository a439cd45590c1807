//! Emotional tone detection.
//!
//! Two strategies share the [`ToneStrategy`] trait. When an external
//! polarity/subjectivity signal is available the [`SignalStrategy`] maps it to
//! an [`Emotion`]; otherwise the [`LexiconStrategy`] counts emotion words and
//! punctuation.

mod lexicon;
mod signal;

pub use lexicon::{LexiconStrategy, ToneTally};
pub use signal::SignalStrategy;

use crate::collaborators::SignalProvider;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// The fixed set of tone labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Worried,
    Confused,
    Excited,
    Neutral,
}

impl Emotion {
    /// Every label, in declaration order
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Worried,
        Emotion::Confused,
        Emotion::Excited,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Worried => "Worried",
            Emotion::Confused => "Confused",
            Emotion::Excited => "Excited",
            Emotion::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown emotion: {0}")]
pub struct ParseEmotionError(String);

impl FromStr for Emotion {
    type Err = ParseEmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEmotionError(s.to_string()))
    }
}

/// Polarity and subjectivity supplied by an external sentiment scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToneSignal {
    /// Sentiment direction, -1 (negative) to 1 (positive)
    pub polarity: f64,
    /// Opinion strength, 0 (factual) to 1 (subjective)
    pub subjectivity: f64,
}

impl ToneSignal {
    /// Create a signal, clamping both values into range
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// A way of turning text into an [`Emotion`]
pub trait ToneStrategy: Send + Sync {
    /// Classify non-empty text
    fn classify(&self, text: &str) -> Emotion;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Pick the signal strategy when a signal is present, the lexicon otherwise
pub fn select_strategy(signal: Option<ToneSignal>) -> Box<dyn ToneStrategy> {
    match signal {
        Some(signal) => Box::new(SignalStrategy::new(signal)),
        None => Box::new(LexiconStrategy),
    }
}

/// Detect the tone of `text`, using `signal` if one is available
pub fn detect_tone(text: &str, signal: Option<ToneSignal>) -> Emotion {
    if text.is_empty() {
        return Emotion::Neutral;
    }

    let strategy = select_strategy(signal);
    let emotion = strategy.classify(text);
    debug!(strategy = strategy.name(), %emotion, "classified tone");
    emotion
}

/// Detect tone, asking `provider` for a signal first.
///
/// A provider error counts as "no signal" and is not retried.
pub fn detect_tone_with(text: &str, provider: &dyn SignalProvider) -> Emotion {
    if text.is_empty() {
        return Emotion::Neutral;
    }

    let signal = match provider.signal(text) {
        Ok(signal) => signal,
        Err(e) => {
            warn!("tone signal unavailable, using lexicon: {}", e);
            None
        }
    };
    detect_tone(text, signal)
}
