//! CLI adapter for mdsift
//!
//! Provides the command-line interface over the core index. This
//! module depends on `core/` but core never depends on it.
//!
//! Every command performs one build phase (strictly sequential,
//! before any querying) and then runs its queries against the
//! immutable result; nothing is persisted between invocations.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mdsift - Section search for heading-structured notes
///
/// Scans note files, splits them into heading-delimited sections,
/// and answers substring searches and section lookups against the
/// resulting in-memory index.
#[derive(Parser, Debug)]
#[command(name = "mdsift")]
#[command(version)]
#[command(about = "Section index and search for heading-structured notes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search sections by case-insensitive substring
    Search(commands::SearchArgs),

    /// List documents and their section headings
    Outline(commands::OutlineArgs),

    /// Print one section by document id and ordinal
    Show(commands::ShowArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  mdsift completions bash > ~/.local/share/bash-completion/completions/mdsift
    ///   zsh:   mdsift completions zsh > ~/.zfunc/_mdsift
    ///   fish:  mdsift completions fish > ~/.config/fish/completions/mdsift.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &config, cli.format),
        Commands::Outline(args) => commands::outline::execute(args, &config, cli.format),
        Commands::Show(args) => commands::show::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
