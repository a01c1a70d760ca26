//! Outline command - list documents and their section headings

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the outline command
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Files or directories to index (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Show build statistics
    #[arg(long)]
    pub stats: bool,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,
}

/// One section in the outline
#[derive(Debug, Serialize)]
pub struct OutlineSection {
    pub ordinal: usize,
    pub level: usize,
    pub heading: String,
}

/// One document in the outline
#[derive(Debug, Serialize)]
pub struct OutlineDocument {
    pub id: usize,
    pub name: String,
    pub sections: Vec<OutlineSection>,
}

/// Outline response
#[derive(Debug, Serialize)]
pub struct OutlineOutput {
    pub documents: Vec<OutlineDocument>,
    pub total_sections: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
}

/// Execute the outline command
pub fn execute(
    args: OutlineArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (index, stats) = super::build_index(&args.paths, &args.include, &args.exclude, config)?;

    let output = OutlineOutput {
        documents: index
            .documents()
            .iter()
            .map(|doc| OutlineDocument {
                id: doc.id.0,
                name: doc.name.clone(),
                sections: doc
                    .sections
                    .iter()
                    .enumerate()
                    .map(|(ordinal, s)| OutlineSection {
                        ordinal,
                        level: s.level,
                        heading: s.heading.clone(),
                    })
                    .collect(),
            })
            .collect(),
        total_sections: index.section_count(),
        duration_secs: args.stats.then(|| stats.duration_ms as f64 / 1000.0),
    };

    match format {
        OutputFormat::Human => {
            if output.documents.is_empty() {
                println!("No documents found");
            }

            for doc in &output.documents {
                println!(
                    "[{}] {}",
                    colors::number(&doc.id.to_string()),
                    colors::doc_name(&doc.name)
                );
                for section in &doc.sections {
                    println!(
                        "  {:>3}  {}{}",
                        colors::dim(&section.ordinal.to_string()),
                        "  ".repeat(section.level.saturating_sub(1)),
                        colors::heading(&section.heading)
                    );
                }
            }

            if let Some(secs) = output.duration_secs {
                println!(
                    "\n{} {} document(s), {} section(s) in {}",
                    colors::success("Indexed"),
                    colors::number(&output.documents.len().to_string()),
                    colors::number(&output.total_sections.to_string()),
                    colors::number(&format_duration(secs))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
