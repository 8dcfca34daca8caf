//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub diagram: DiagramConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extraction settings
///
/// The skip count after the start marker is a convention observed in field
/// exports (the marker rung plus a section-reset rung), not a guaranteed
/// rule, so it stays configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Comment substring marking the start of the state-logic section
    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    /// Comment substring marking the end of the state-logic section
    #[serde(default = "default_end_marker")]
    pub end_marker: String,

    /// Number of rungs skipped unconditionally after the start marker
    #[serde(default = "default_skip_rungs")]
    pub skip_rungs: usize,

    /// Data type name identifying a state-machine tag during auto-detection
    #[serde(default = "default_state_tag_type")]
    pub state_tag_type: String,

    /// Tag name suffix accepted as a state-machine naming convention
    #[serde(default = "default_state_tag_suffix")]
    pub state_tag_suffix: String,
}

/// Diagram output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Diagram flavor: "flowchart" or "state-diagram"
    #[serde(default = "default_flavor")]
    pub flavor: String,

    /// Layout direction (TB, LR, ...)
    #[serde(default = "default_direction")]
    pub direction: String,

    /// Maximum rendered label length in characters
    #[serde(default = "default_max_label_len")]
    pub max_label_len: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_start_marker() -> String {
    "STATE LOGIC".to_string()
}

fn default_end_marker() -> String {
    "FAULT".to_string()
}

fn default_skip_rungs() -> usize {
    2
}

fn default_state_tag_type() -> String {
    "StateLogic".to_string()
}

fn default_state_tag_suffix() -> String {
    "_PH".to_string()
}

fn default_flavor() -> String {
    "flowchart".to_string()
}

fn default_direction() -> String {
    "TB".to_string()
}

fn default_max_label_len() -> usize {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            skip_rungs: default_skip_rungs(),
            state_tag_type: default_state_tag_type(),
            state_tag_suffix: default_state_tag_suffix(),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            flavor: default_flavor(),
            direction: default_direction(),
            max_label_len: default_max_label_len(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./l5x-state-viz.toml
    /// 2. ~/.l5x-state-viz/config.toml
    /// 3. /etc/l5x-state-viz/config.toml
    pub fn load() -> Result<Self> {
        let paths = vec![
            PathBuf::from("l5x-state-viz.toml"),
            dirs::home_dir()
                .map(|h| h.join(".l5x-state-viz").join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("/dev/null")),
            PathBuf::from("/etc/l5x-state-viz/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extraction.start_marker, "STATE LOGIC");
        assert_eq!(config.extraction.end_marker, "FAULT");
        assert_eq!(config.extraction.skip_rungs, 2);
        assert_eq!(config.diagram.flavor, "flowchart");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[extraction]
start_marker = "SEQ LOGIC"
skip_rungs = 1

[diagram]
flavor = "state-diagram"
direction = "LR"

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.extraction.start_marker, "SEQ LOGIC");
        assert_eq!(config.extraction.skip_rungs, 1);
        // Unset fields keep their defaults
        assert_eq!(config.extraction.end_marker, "FAULT");
        assert_eq!(config.diagram.flavor, "state-diagram");
        assert_eq!(config.logging.level, "debug");
    }
}
