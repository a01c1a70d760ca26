//! mdsift CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Search notes for a keyword
//! mdsift search volatile ./notes
//!
//! # List documents and their section headings
//! mdsift outline ./notes --stats
//!
//! # Print one section in full
//! mdsift show 0 2 ./notes
//! ```

use clap::Parser;
use mdsift::cli::{output, run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so JSON output stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdsift=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
