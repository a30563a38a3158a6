//! CLI interface for the job matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Match a candidate profile against job postings")]
#[command(
    long_about = "Score job postings against a candidate profile using weighted skill, \
                  experience, education, and title heuristics plus TF-IDF text similarity"
)]
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
    /// Rank job postings against a profile
    Match {
        /// Path to the profile JSON file
        #[arg(short, long)]
        profile: PathBuf,

        /// Path to the job postings JSON file (array of postings)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Override the minimum match score from the config
        #[arg(short, long)]
        min_score: Option<f64>,

        /// Show per-match skill gaps and analysis text
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file instead of stdout
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Analyze a single job posting
    Analyze {
        /// Path to the job posting JSON file
        #[arg(short, long)]
        job: PathBuf,

        /// Optional profile JSON for a personalized fit assessment
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
