//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub input: InputSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Serialize)]
pub struct InputSettings {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub max_limit: usize,
    pub excerpt_lines: usize,
}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        input: InputSettings {
            include_patterns: config.input.include_patterns.clone(),
            exclude_patterns: config.input.exclude_patterns.clone(),
            max_file_size_mb: config.input.max_file_size_mb,
        },
        search: SearchSettings {
            default_limit: config.search.default_limit,
            max_limit: config.search.max_limit,
            excerpt_lines: config.search.excerpt_lines,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  input:");
            println!("    include_patterns: {:?}", response.input.include_patterns);
            println!("    exclude_patterns: {:?}", response.input.exclude_patterns);
            println!("    max_file_size_mb: {}", response.input.max_file_size_mb);
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!("    max_limit: {}", response.search.max_limit);
            println!("    excerpt_lines: {}", response.search.excerpt_lines);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
