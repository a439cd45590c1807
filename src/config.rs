//! Configuration loading and management for summatone.
//!
//! Loads settings from `summatone.toml` with environment variable overrides.
//! Every section has defaults, so a missing file is not an error.

use crate::languages;
use crate::summarizer::SummarizerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log level
pub const LOG_ENV: &str = "SUMMATONE_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Summarizer tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Inputs shorter than this many characters are not summarized
    pub min_chars: usize,
    /// Number of sentences in a summary
    pub max_sentences: usize,
}

/// Default translation language pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Source language code, or "auto"
    pub source: String,
    /// Target language code
    pub target: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "warn" or "summatone=debug"
    pub level: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub summarizer: SummaryConfig,
    #[serde(default)]
    pub languages: LanguageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location (summatone.toml in cwd or home)
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Override settings from environment variables
    fn apply_env(&mut self) {
        if let Ok(level) = std::env::var(LOG_ENV) {
            self.logging.level = level;
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("summatone.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        let home_config = dirs::home_dir()?
            .join(".config")
            .join("summatone")
            .join("summatone.toml");
        home_config.exists().then_some(home_config)
    }

    /// Reject settings the summarizer or translator cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summarizer.max_sentences == 0 {
            return Err(ConfigError::Invalid(
                "summarizer.max_sentences must be at least 1".to_string(),
            ));
        }
        if !languages::is_valid_source(&self.languages.source) {
            return Err(ConfigError::Invalid(format!(
                "unknown source language: {}",
                self.languages.source
            )));
        }
        if !languages::is_valid_target(&self.languages.target) {
            return Err(ConfigError::Invalid(format!(
                "unknown target language: {}",
                self.languages.target
            )));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Invalid(format!(
                "invalid logging.level '{}': {}",
                self.logging.level, e
            )));
        }
        Ok(())
    }

    /// Summarizer settings with the configured overrides applied
    pub fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig {
            min_chars: self.summarizer.min_chars,
            max_sentences: self.summarizer.max_sentences,
            ..SummarizerConfig::default()
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        let defaults = SummarizerConfig::default();
        Self {
            min_chars: defaults.min_chars,
            max_sentences: defaults.max_sentences,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: languages::AUTO.to_string(),
            target: "en".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
