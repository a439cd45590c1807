//! # Summatone
//!
//! Extractive summarisation and emotional tone detection for transcripts.
//!
//! ## Features
//!
//! - **Extractive Summaries**: Keeps the highest scoring sentences in their original order
//! - **Tone Detection**: Maps an external sentiment signal to a fixed emotion set, with a
//!   lexicon fallback when no signal is available
//! - **Pure Core**: No network I/O; transcription, translation and export are plugged in
//!   through the traits in [`collaborators`]

pub mod analysis;
pub mod collaborators;
pub mod config;
pub mod languages;
pub mod stopwords;
pub mod summarizer;
pub mod summary;
pub mod tone;

pub use analysis::Analysis;
pub use config::Config;
pub use summarizer::{summarize, Summarizer};
pub use summary::{Summary, SummaryKind};
pub use tone::{detect_tone, Emotion, ToneSignal};
