//! TOML configuration file support.
//!
//! ```toml
//! # isatab.toml
//! [output]
//! file_name = "i_investigation.txt"
//! atomic = true
//! buffer_capacity = 65536
//! ```

use anyhow::{Context, Result};
use isatab::format::WriterConfig;
use serde::Deserialize;
use std::path::Path;

/// Default name of the investigation file
pub const DEFAULT_FILE_NAME: &str = "i_investigation.txt";

/// Root configuration structure for isatab.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for written investigation files.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// File name used when no output path is given.
    pub file_name: Option<String>,

    /// Stage output in a temporary file before moving it into place.
    pub atomic: Option<bool>,

    /// Output buffer size in bytes.
    pub buffer_capacity: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// File name for the investigation file.
    pub fn file_name(&self) -> &str {
        self.output.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Writer configuration, with file values over defaults.
    pub fn writer_config(&self) -> WriterConfig {
        let defaults = WriterConfig::default();
        WriterConfig {
            atomic: self.output.atomic.unwrap_or(defaults.atomic),
            buffer_capacity: self.output.buffer_capacity.unwrap_or(defaults.buffer_capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [output]
            file_name = "i_drought.txt"
            atomic = false
            buffer_capacity = 4096
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.file_name(), "i_drought.txt");
        let writer = config.writer_config();
        assert!(!writer.atomic);
        assert_eq!(writer.buffer_capacity, 4096);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            atomic = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.file_name(), DEFAULT_FILE_NAME);
        assert_eq!(
            config.writer_config().buffer_capacity,
            WriterConfig::default().buffer_capacity
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.writer_config().atomic);
        assert_eq!(config.file_name(), DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[output]\natomic = \"yes\"").is_err());
    }
}
