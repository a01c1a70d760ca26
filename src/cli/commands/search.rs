//! Search command - substring search over indexed sections

use crate::cli::output::{colors, excerpt};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Substring to search for (case-insensitive; empty matches
    /// every section)
    pub query: String,

    /// Files or directories to index (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show document names and headings (no body excerpt)
    #[arg(long)]
    pub headings_only: bool,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub document: String,
    pub doc_id: usize,
    pub ordinal: usize,
    pub level: usize,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Vec<String>>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub documents_indexed: usize,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (index, stats) = super::build_index(&args.paths, &args.include, &args.exclude, config)?;

    let limit = args
        .limit
        .unwrap_or(config.search.default_limit)
        .clamp(1, config.search.max_limit);

    let results: Vec<SearchResultItem> = index
        .search(&args.query)
        .take(limit)
        .map(|hit| SearchResultItem {
            rank: hit.rank,
            document: hit.doc_name.to_string(),
            doc_id: hit.loc.doc.0,
            ordinal: hit.loc.ordinal,
            level: hit.section.level,
            heading: hit.section.heading.clone(),
            excerpt: if args.headings_only {
                None
            } else {
                Some(excerpt(&hit.section.body, config.search.excerpt_lines))
            },
        })
        .collect();

    let output = SearchResponseOutput {
        query: args.query.clone(),
        documents_indexed: stats.documents,
        total_results: results.len(),
        results,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No sections matching '{}' in {} document(s)",
                    colors::label(&args.query),
                    colors::number(&output.documents_indexed.to_string())
                );
            } else {
                println!(
                    "Found {} section(s) matching '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&args.query)
                );

                for result in &output.results {
                    println!(
                        "[{}] {} :: {}  {}",
                        colors::rank(&result.rank.to_string()),
                        colors::doc_name(&result.document),
                        result.ordinal,
                        colors::heading(&result.heading)
                    );
                    if let Some(lines) = &result.excerpt {
                        for line in lines {
                            println!("    {}", colors::dim(line));
                        }
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
