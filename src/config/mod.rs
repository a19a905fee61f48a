//! Configuration system for graphsift.
//!
//! This module provides the configuration structure for graphsift with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use graphsift::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.default_mode, "all");
//! assert_eq!(config.max_results, 10_000);
//!
//! // Create custom configuration
//! let custom = Config {
//!     max_depth: 5,
//!     ..Config::default()
//! };
//! assert_eq!(custom.search_options().max_depth, 5);
//! ```

use crate::search::{SearchMode, SearchOptions, DEFAULT_MAX_RESULTS};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the graphsift application.
///
/// # Fields
///
/// * `default_mode` - Search mode used when `--mode` is not given (default: "all")
/// * `max_depth` - Deepest level to search, 0 for unlimited (default: 0)
/// * `max_results` - Maximum number of hits to collect (default: 10000)
/// * `output` - Output format: "text" or "json" (default: "text")
/// * `show_types` - Include the runtime type column in text output (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search mode used when none is given on the command line
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// Deepest level to search; 0 means unlimited
    #[serde(default)]
    pub max_depth: usize,

    /// Maximum number of hits to collect
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Output format: "text" or "json"
    #[serde(default = "default_output")]
    pub output: String,

    /// Include the runtime type column in text output
    #[serde(default = "default_show_types")]
    pub show_types: bool,
}

fn default_mode() -> String {
    SearchMode::All.to_string()
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_output() -> String {
    "text".to_string()
}

fn default_show_types() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            max_depth: 0,
            max_results: default_max_results(),
            output: default_output(),
            show_types: default_show_types(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/graphsift/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("graphsift");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "ignoring invalid config file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Search limits taken from this configuration.
    pub fn search_options(&self) -> SearchOptions<'static> {
        SearchOptions::new()
            .with_max_depth(self.max_depth)
            .with_max_results(self.max_results)
    }

    /// Returns true when results should be printed as JSON.
    pub fn wants_json(&self) -> bool {
        self.output.eq_ignore_ascii_case("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_mode, "all");
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.output, "text");
        assert!(config.show_types);
        assert!(!config.wants_json());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("max_depth = 3\noutput = \"json\"").unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_results, 10_000);
        assert!(config.wants_json());
    }

    #[test]
    fn test_search_options_from_config() {
        let config = Config {
            max_depth: 4,
            max_results: 7,
            ..Default::default()
        };
        let options = config.search_options();
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.max_results, 7);
    }
}
