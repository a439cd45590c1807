//! Call contracts for the services that surround the core.
//!
//! Transcription, translation, pretrained sentiment scoring and document
//! rendering live outside this crate. Callers plug their clients in through
//! these traits; nothing here performs network I/O.

use crate::tone::ToneSignal;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    Failed(String),
    #[error("service returned no result")]
    EmptyResult,
}

/// Speech-to-text service
pub trait Transcriber {
    /// Transcribe raw audio. `language_hint` is a locale such as "en-US".
    fn transcribe(&self, audio: &[u8], language_hint: &str) -> Result<String, CollaboratorError>;
}

/// Machine translation service
pub trait Translator {
    /// Translate `text` from `src` ("auto" allowed) to `dest`
    fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, CollaboratorError>;
}

/// Pretrained sentiment model.
///
/// Its label is reported next to the detected tone and need not agree with it.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<String, CollaboratorError>;
}

/// Source of polarity/subjectivity signals for tone detection
pub trait SignalProvider {
    /// `Ok(None)` means the provider has no opinion on this text
    fn signal(&self, text: &str) -> Result<Option<ToneSignal>, CollaboratorError>;
}

/// Provider for deployments without a sentiment scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSignal;

impl SignalProvider for NoSignal {
    fn signal(&self, _text: &str) -> Result<Option<ToneSignal>, CollaboratorError> {
        Ok(None)
    }
}

/// Export formats offered by the document renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Zip,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Zip => "zip",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Document export service
pub trait DocumentRenderer {
    fn render(&self, text: &str, format: ExportFormat) -> Result<Vec<u8>, CollaboratorError>;
}
