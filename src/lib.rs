//! mdsift - Section index and search for heading-structured notes
//!
//! Parses a directory of markdown-style note files into ordered
//! heading/section records, builds one immutable in-memory index
//! per invocation, and answers lookups and case-insensitive
//! substring searches against it.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - parser (heading-delimited sections)
//!   - index (build + queries)
//!   - loader (file walking, build orchestration)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key properties
//!
//! - Parsing is total: any text yields a section sequence, never
//!   an error
//! - The build is deterministic and all-or-nothing; no partial
//!   index is ever exposed
//! - The built index is immutable, so concurrent readers need no
//!   locking

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, SiftError};
pub use crate::core::index::{Index, IndexBuilder};
pub use crate::core::loader::Loader;
pub use crate::core::types::*;
