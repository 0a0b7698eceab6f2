//! Configuration management for the portfolio matcher

use crate::error::{MatcherError, Result};
use crate::matching::DEFAULT_FUZZY_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub output: OutputConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub fuzzy_threshold: f64,
    /// How many gap suggestions to display
    pub gap_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_entries: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        let history_path = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("portfolio-matcher")
            .join("history.json");

        Self {
            matching: MatchingConfig {
                fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
                gap_limit: 12,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            history: HistoryConfig {
                enabled: true,
                max_entries: 40,
                path: history_path,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("portfolio-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.matching.fuzzy_threshold) {
            return Err(MatcherError::Configuration(format!(
                "matching.fuzzy_threshold must be between 0 and 1, got {}",
                self.matching.fuzzy_threshold
            )));
        }
        if self.history.max_entries == 0 {
            return Err(MatcherError::Configuration(
                "history.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Update a single value addressed as "section.key"
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        updated.apply_value(key, value)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn apply_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "matching.fuzzy_threshold" => self.matching.fuzzy_threshold = parse_value(key, value)?,
            "matching.gap_limit" => self.matching.gap_limit = parse_value(key, value)?,
            "output.format" => {
                self.output.format = parse_output_format(value).map_err(MatcherError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "history.enabled" => self.history.enabled = parse_value(key, value)?,
            "history.max_entries" => self.history.max_entries = parse_value(key, value)?,
            "history.path" => self.history.path = PathBuf::from(value),
            _ => {
                return Err(MatcherError::Configuration(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| MatcherError::Configuration(format!("Invalid value for {}: {}", key, value)))
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.matching.fuzzy_threshold, 0.75);
        assert_eq!(config.matching.gap_limit, 12);
        assert_eq!(config.history.max_entries, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("matching.fuzzy_threshold", "0.8").unwrap();
        config.set_value("output.format", "json").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.fuzzy_threshold, 0.8);
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set_value("matching.fuzzy_threshold", "1.5").is_err());
        assert!(config.set_value("history.max_entries", "many").is_err());
        assert!(config.set_value("nope.key", "1").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("pdf").is_err());
    }
}
