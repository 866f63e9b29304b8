//! CLI interface for the resume ATS tool

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(about = "Keyword-based ATS match scoring for resumes")]
#[command(long_about = "Score how well a resume covers the keywords of a job description and get tiered advice on closing the gaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include keyword rankings for both documents
        #[arg(short, long)]
        detailed: bool,
    },

    /// Score one resume against several job descriptions
    Rank {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description files (TXT, MD)
        #[arg(short, long, num_args = 1.., required = true)]
        jobs: Vec<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the keywords extracted from a document
    Keywords {
        /// Path to a TXT or MD file
        file: PathBuf,

        /// Maximum number of keywords to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show occurrence counts
        #[arg(long)]
        counts: bool,
    },

    /// Generate improvement advice for a previously computed score
    Advise {
        /// ATS match percentage (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,

        /// Missing keywords, most important first
        #[arg(short, long, num_args = 0..)]
        missing: Vec<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "extraction.min_length")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
