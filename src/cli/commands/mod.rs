//! CLI command implementations
//!
//! One module per subcommand. Each command builds an index from
//! the paths given on the command line (default: the current
//! directory) and queries it.

pub mod completions;
pub mod config;
pub mod outline;
pub mod search;
pub mod show;

pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use outline::OutlineArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;

use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::loader::Loader;
use crate::core::types::BuildStats;
use crate::core::Index;

/// Build an index from CLI paths, applying pattern overrides.
///
/// `include`/`exclude` replace the configured patterns when
/// non-empty, mirroring how per-invocation flags beat config.
pub(crate) fn build_index(
    paths: &[PathBuf],
    include: &[String],
    exclude: &[String],
    config: &Config,
) -> Result<(Index, BuildStats), Box<dyn std::error::Error>> {
    let include_patterns = if include.is_empty() {
        config.input.include_patterns.clone()
    } else {
        include.to_vec()
    };

    let exclude_patterns = if exclude.is_empty() {
        config.input.exclude_patterns.clone()
    } else {
        exclude.to_vec()
    };

    let loader = Loader::new(
        include_patterns,
        exclude_patterns,
        config.input.max_file_size_mb,
    )?;

    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let (index, stats) = loader.build_index(&paths)?;
    Ok((index, stats))
}
