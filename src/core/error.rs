//! Error types and error handling for mdsift.
//!
//! Build-time errors (duplicate names, unreadable files, bad
//! configuration) abort index construction entirely; query-time
//! errors are returned per call and leave the index valid.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdsift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Main error type for mdsift
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Duplicate document name: {0}")]
    DuplicateDocument(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document {0} not found")]
    DocumentNotFound(usize),

    #[error("Section {ordinal} not found in document {doc}")]
    SectionNotFound { doc: usize, ordinal: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SiftError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error (query-time,
    /// recoverable)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SiftError::DocumentNotFound(_) | SiftError::SectionNotFound { .. }
        )
    }

    /// Check if this error aborts index construction
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            SiftError::DuplicateDocument(_)
                | SiftError::Io { .. }
                | SiftError::Config(_)
                | SiftError::Toml(_)
        )
    }
}
