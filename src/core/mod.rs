//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent of
//! the CLI front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **parser**: Heading-delimited section parsing
//! - **index**: Index construction and queries
//! - **loader**: File walking and index build orchestration

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiftError};
pub use index::{Index, IndexBuilder};
pub use loader::Loader;
