//! Application configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::imposter::{WordCatalog, WordEntry, parse_clock};

/// Defaults for the setup screen plus catalog extensions.
///
/// ```toml
/// discussion = "1:30"
/// clue = true
///
/// [[words]]
/// word = "Lighthouse"
/// clue = "Beam"
/// category = "Places"
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default discussion length as `m:ss`.
    #[serde(default = "default_discussion")]
    discussion: String,

    /// Whether the imposter gets a clue by default.
    #[serde(default)]
    clue: bool,

    /// Extra catalog entries.
    #[serde(default)]
    words: Vec<WordEntry>,
}

#[instrument]
fn default_discussion() -> String {
    "1:00".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            discussion: default_discussion(),
            clue: false,
            words: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(extra_words = config.words.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, AppConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AppConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.discussion_ms()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, AppConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Default discussion length in milliseconds.
    pub fn discussion_ms(&self) -> Result<u64, AppConfigError> {
        parse_clock(&self.discussion).map_err(|e| AppConfigError::new(e.to_string()))
    }

    /// Built-in catalog extended with the configured words.
    #[instrument(skip(self))]
    pub fn catalog(&self) -> WordCatalog {
        WordCatalog::builtin_with(self.words.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct AppConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AppConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::imposter::Category;
    use std::io::Write;

    #[test]
    fn test_defaults_when_missing() {
        let config = AppConfig::load_or_default("/nonexistent/imposter.toml").unwrap();
        assert_eq!(config.discussion_ms().unwrap(), 60_000);
        assert!(!*config.clue());
    }

    #[test]
    fn test_loads_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
discussion = "2:30"
clue = true

[[words]]
word = "Lighthouse"
clue = "Beam"
category = "Places"
"#
        )
        .unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.discussion_ms().unwrap(), 150_000);
        assert!(*config.clue());
        let catalog = config.catalog();
        let entry = catalog.lookup("lighthouse").unwrap();
        assert_eq!(entry.category, Category::Places);
    }

    #[test]
    fn test_bad_clock_rejected() {
        let err = AppConfig::from_toml("discussion = \"soon\"").unwrap_err();
        assert!(err.message.contains("soon"));
    }
}
