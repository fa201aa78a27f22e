//! CLI interface for the resume tailor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "Tailor a resume to a job posting by injecting missing keywords")]
#[command(
    long_about = "Extract ranked keywords from a job posting and rewrite the resume's \
                  work-experience bullets to cover the ones it is missing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tailor a resume against a job posting
    Tailor {
        /// Path to the resume text file
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job posting text file
        #[arg(short, long)]
        job: PathBuf,

        /// Stable posting URL used as the cache key
        #[arg(short, long)]
        url: Option<String>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the tailored resume to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Seed for phrase selection (reproducible output)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Extract and print keywords from a job posting
    Extract {
        /// Path to the job posting text file
        #[arg(short, long)]
        job: PathBuf,

        /// Cap on extracted keywords
        #[arg(short, long)]
        max_keywords: Option<usize>,
    },

    /// Show the active configuration
    Config,
}

/// Validate that a file has one of the expected extensions
pub fn validate_file_extension(path: &PathBuf, valid_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if valid_extensions.contains(&ext.to_lowercase().as_str()) => Ok(()),
        Some(ext) => Err(format!(
            "unsupported file extension '{}', expected one of: {}",
            ext,
            valid_extensions.join(", ")
        )),
        None => Err("file has no extension".to_string()),
    }
}
