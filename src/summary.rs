//! Summary struct - the structured output of the extractive summarizer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Marker returned for input too short to summarize
pub const TOO_SHORT: &str = "Text is too short to summarize.";

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Input was empty or below the minimum length; text is the marker
    TooShort,
    /// Input had too few sentences; text is the input itself
    Unchanged,
    /// Sentences were selected from the input
    Extracted,
}

/// Result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// Which path produced the text
    pub kind: SummaryKind,
    /// Ordinals of the selected sentences, ascending
    pub selected: Vec<usize>,
}

impl Summary {
    /// Summary for input below the minimum length
    pub fn too_short() -> Self {
        Self {
            text: TOO_SHORT.to_string(),
            kind: SummaryKind::TooShort,
            selected: Vec::new(),
        }
    }

    /// Summary that hands the input back untouched
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SummaryKind::Unchanged,
            selected: Vec::new(),
        }
    }

    /// Summary built from selected sentences
    pub fn extracted(text: String, selected: Vec<usize>) -> Self {
        Self {
            text,
            kind: SummaryKind::Extracted,
            selected,
        }
    }

    /// Check if sentences were actually extracted
    pub fn is_extracted(&self) -> bool {
        self.kind == SummaryKind::Extracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&Summary::too_short()).unwrap();
        assert!(json.contains("\"kind\":\"too_short\""));
        assert!(json.contains(TOO_SHORT));
    }

    #[test]
    fn test_unchanged_keeps_text() {
        let summary = Summary::unchanged("One. Two.");
        assert_eq!(summary.text, "One. Two.");
        assert!(!summary.is_extracted());
        assert!(summary.selected.is_empty());
    }
}
