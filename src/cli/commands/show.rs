//! Show command - print one section by document id and ordinal

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::types::DocId;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document id (see `mdsift outline`)
    pub doc_id: usize,

    /// Section ordinal within the document
    pub ordinal: usize,

    /// Files or directories to index (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// Show response
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub document: String,
    pub doc_id: usize,
    pub ordinal: usize,
    pub level: usize,
    pub heading: String,
    pub body: String,
}

/// Execute the show command
pub fn execute(
    args: ShowArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (index, _stats) = super::build_index(&args.paths, &args.include, &args.exclude, config)?;

    // Query-time not-found propagates to the caller and exits
    // non-zero; the index itself stays valid
    let doc = index.document(DocId(args.doc_id))?;
    let section = index.section(DocId(args.doc_id), args.ordinal)?;

    let output = ShowOutput {
        document: doc.name.clone(),
        doc_id: args.doc_id,
        ordinal: args.ordinal,
        level: section.level,
        heading: section.heading.clone(),
        body: section.body.clone(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} :: {}  {}",
                colors::doc_name(&output.document),
                output.ordinal,
                colors::heading(&output.heading)
            );
            if !output.body.is_empty() {
                println!("{}", output.body);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
