//! Optional lesson settings, read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! numbers the lessons were written against.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::cleanup::db::DbSettings;
use crate::error::{LessonError, Result};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "RAMP_UP_CONFIG";

/// A worker's assigned ticker symbol and the glyph it prints for each match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockTag {
    pub symbol: String,
    pub icon: String,
}

impl StockTag {
    pub fn new(symbol: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub symbols: Vec<String>,
    pub tags: Vec<StockTag>,
    pub queue_capacity: usize,
    pub spammers: usize,
    pub max_emojis: usize,
    pub timeout_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            symbols: ["AAPL", "GOOG", "FB", "AMZN"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tags: vec![
                StockTag::new("AAPL", "🍎"),
                StockTag::new("GOOG", "🤓"),
                StockTag::new("FB", "🤢"),
                StockTag::new("AMZN", "📦"),
            ],
            queue_capacity: 100,
            spammers: 2,
            max_emojis: 100_000,
            timeout_ms: 5_000,
        }
    }
}

impl PipelineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn workers(&self) -> usize {
        self.tags.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(LessonError::invalid_config("at least one symbol is required"));
        }
        if self.tags.is_empty() {
            return Err(LessonError::invalid_config("at least one worker tag is required"));
        }
        if self.spammers == 0 {
            return Err(LessonError::invalid_config("at least one spammer is required"));
        }
        if self.queue_capacity == 0 {
            return Err(LessonError::invalid_config("queue_capacity must be at least 1"));
        }
        if self.timeout_ms == 0 {
            return Err(LessonError::invalid_config("timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MailboxConfig {
    pub capacity: usize,
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self { capacity: 3 }
    }
}

impl MailboxConfig {
    /// A zero-capacity queue would reject every offer, not just the overflow.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(LessonError::invalid_config("mailbox capacity must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LessonSettings {
    pub pipeline: PipelineConfig,
    pub mailbox: MailboxConfig,
    pub database: DbSettings,
}

impl LessonSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: LessonSettings = toml::from_str(content)?;
        settings.pipeline.validate()?;
        settings.mailbox.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reads the file named by [`CONFIG_ENV`], or returns defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading lesson settings");
                Self::load(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_lesson_numbers() {
        let config = PipelineConfig::default();
        assert_eq!(config.workers(), 4);
        assert_eq!(config.spammers, 2);
        assert_eq!(config.queue_capacity, 100);
        assert_eq!(config.max_emojis, 100_000);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = LessonSettings::from_toml_str("").unwrap();
        assert_eq!(settings, LessonSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = LessonSettings::from_toml_str(
            r#"
            [pipeline]
            max_emojis = 10
            timeout_ms = 250

            [[pipeline.tags]]
            symbol = "AAPL"
            icon = "A"

            [mailbox]
            capacity = 8
            "#,
        )
        .unwrap();

        assert_eq!(settings.pipeline.max_emojis, 10);
        assert_eq!(settings.pipeline.timeout(), Duration::from_millis(250));
        assert_eq!(settings.pipeline.tags, vec![StockTag::new("AAPL", "A")]);
        assert_eq!(settings.pipeline.symbols.len(), 4);
        assert_eq!(settings.mailbox.capacity, 8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = LessonSettings::from_toml_str("[pipeline]\nspammers = 0\n").unwrap_err();
        assert!(matches!(err, LessonError::InvalidConfig(_)));

        let err = LessonSettings::from_toml_str("[pipeline]\ntags = []\n").unwrap_err();
        assert!(err.to_string().contains("worker tag"));
    }

    #[test]
    fn test_zero_mailbox_capacity_rejected() {
        let err = LessonSettings::from_toml_str("[mailbox]\ncapacity = 0\n").unwrap_err();
        assert!(matches!(err, LessonError::InvalidConfig(_)));
        assert!(err.to_string().contains("mailbox capacity"));

        assert!(MailboxConfig { capacity: 1 }.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let err = LessonSettings::from_toml_str("[pipeline\n").unwrap_err();
        assert!(matches!(err, LessonError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pipeline]\nqueue_capacity = 7").unwrap();

        let settings = LessonSettings::load(file.path()).unwrap();
        assert_eq!(settings.pipeline.queue_capacity, 7);
    }
}
