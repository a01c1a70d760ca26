//! Configuration management for mdsift.
//!
//! Loads configuration from a TOML file and environment
//! variables, with sensible defaults for all settings.

use crate::core::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Input collection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Body lines shown per hit in human output
    #[serde(default = "default_excerpt_lines")]
    pub excerpt_lines: usize,
}

// Default value functions
fn default_include_patterns() -> Vec<String> {
    vec![
        "*.md".to_string(),
        "*.markdown".to_string(),
        "*.txt".to_string(),
    ]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ]
}

fn default_max_file_size() -> usize {
    10
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    1000
}

fn default_excerpt_lines() -> usize {
    3
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            excerpt_lines: default_excerpt_lines(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SiftError::Config(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File discovery order:
    /// 1. MDSIFT_CONFIG env var
    /// 2. ./mdsift.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("MDSIFT_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("mdsift.toml").exists() {
            Self::from_file("mdsift.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_size) = env::var("MDSIFT_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.input.max_file_size_mb = size;
            }
        }
        if let Ok(limit) = env::var("MDSIFT_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("MDSIFT_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
        if let Ok(lines) = env::var("MDSIFT_EXCERPT_LINES") {
            if let Ok(n) = lines.parse() {
                self.search.excerpt_lines = n;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.max_file_size_mb == 0 {
            return Err(SiftError::Config(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(SiftError::Config(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(SiftError::Config(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration at debug level
    pub fn log_config(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!(
            "  Include patterns: {} patterns",
            self.input.include_patterns.len()
        );
        tracing::debug!(
            "  Exclude patterns: {} patterns",
            self.input.exclude_patterns.len()
        );
        tracing::debug!("  Max file size: {} MB", self.input.max_file_size_mb);
        tracing::debug!("  Default limit: {}", self.search.default_limit);
        tracing::debug!("  Max limit: {}", self.search.max_limit);
        tracing::debug!("  Excerpt lines: {}", self.search.excerpt_lines);
    }
}
