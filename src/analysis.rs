//! Combined summary and tone result for one piece of text.

use crate::collaborators::SentimentScorer;
use crate::languages;
use crate::summarizer::Summarizer;
use crate::summary::Summary;
use crate::tone::{detect_tone, Emotion, ToneSignal};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

/// Everything derived from one input text
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    /// The text as received
    pub original: String,
    /// Extractive summary of the text
    pub summary: Summary,
    /// Detected emotional tone
    pub tone: Emotion,
    /// Label from a pretrained sentiment scorer, if one was consulted
    pub sentiment: Option<String>,
    /// Source language code
    pub src_lang: String,
    /// Destination language code
    pub dest_lang: String,
    /// When the analysis was produced
    pub timestamp: DateTime<Utc>,
}

impl Analysis {
    /// Analyse text with the default summarizer
    pub fn new(text: &str, signal: Option<ToneSignal>) -> Self {
        Self::with_summarizer(&Summarizer::new(), text, signal)
    }

    /// Analyse text with a configured summarizer
    pub fn with_summarizer(
        summarizer: &Summarizer,
        text: &str,
        signal: Option<ToneSignal>,
    ) -> Self {
        let summary = summarizer.summarize(text);
        let tone = detect_tone(text, signal);
        info!(kind = ?summary.kind, %tone, "analysed text");

        Self {
            original: text.to_string(),
            summary,
            tone,
            sentiment: None,
            src_lang: languages::AUTO.to_string(),
            dest_lang: "en".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Record the language pair
    pub fn with_languages(mut self, src: &str, dest: &str) -> Result<Self, AnalysisError> {
        if !languages::is_valid_source(src) {
            return Err(AnalysisError::UnknownLanguage(src.to_string()));
        }
        if !languages::is_valid_target(dest) {
            return Err(AnalysisError::UnknownLanguage(dest.to_string()));
        }
        self.src_lang = src.to_string();
        self.dest_lang = dest.to_string();
        Ok(self)
    }

    /// Attach a pretrained sentiment label. A failing scorer leaves it empty.
    pub fn with_sentiment(mut self, scorer: &dyn SentimentScorer) -> Self {
        match scorer.score(&self.original) {
            Ok(label) => self.sentiment = Some(label),
            Err(e) => warn!("sentiment scorer failed: {}", e),
        }
        self
    }

    /// Display names for the language pair
    pub fn language_names(&self) -> (&'static str, &'static str) {
        let src = languages::name(&self.src_lang).unwrap_or("Auto-detected");
        let dest = languages::name(&self.dest_lang).unwrap_or("Unknown");
        (src, dest)
    }

    /// Plain-text report, the input a document renderer receives
    pub fn to_report(&self) -> String {
        let (src, dest) = self.language_names();
        let mut report = String::from("Transcript Analysis\n\n");
        report.push_str(&format!(
            "Generated: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));
        report.push_str(&format!("Languages: {} -> {}\n", src, dest));
        report.push_str(&format!("Tone: {}\n", self.tone));
        if let Some(sentiment) = &self.sentiment {
            report.push_str(&format!("Sentiment: {}\n", sentiment));
        }
        report.push_str(&format!("\nSummary\n{}\n", self.summary.text));
        report.push_str(&format!("\nOriginal\n{}\n", self.original));
        report
    }
}
