//! Job matcher: score job postings against a candidate profile

use clap::Parser;
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::Config;
use job_matcher::error::{JobMatcherError, Result};
use job_matcher::matching::{analyze_job, MatchEngine};
use job_matcher::models::{JobPosting, Profile};
use job_matcher::output::{AnalysisReport, MatchReport, ReportGenerator};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Match {
            profile,
            jobs,
            output,
            min_score,
            detailed,
            save,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;

            if let Some(min_score) = min_score {
                config.scoring.min_match_score = min_score;
            }
            if detailed {
                config.output.detailed = true;
            }

            let profile: Profile = read_json(&profile)?;
            let postings: Vec<JobPosting> = read_json(&jobs)?;
            info!(
                "Matching profile against {} posting(s), min score {:.2}",
                postings.len(),
                config.scoring.min_match_score
            );

            let min_match_score = config.scoring.min_match_score;
            let use_colors = config.output.color_output && save.is_none();
            let show_details = config.output.detailed;

            let engine = MatchEngine::new(config)?;
            let matches = engine.match_jobs(&profile, &postings);
            let report = MatchReport::new(matches, postings.len(), min_match_score);
            if report.is_degraded() {
                warn!("Text vectorization failed; fallback scores were used");
            }

            let generator = ReportGenerator::new(use_colors, show_details);
            let rendered = generator.render_matches(&report, &output_format)?;
            emit(&rendered, save.as_deref())
        }

        Commands::Analyze {
            job,
            profile,
            output,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(JobMatcherError::InvalidInput)?;

            let posting: JobPosting = read_json(&job)?;
            let profile: Option<Profile> = profile.map(|path| read_json(&path)).transpose()?;
            info!("Analyzing posting {}", posting.id);

            let report = AnalysisReport::new(analyze_job(&posting, profile.as_ref()));
            let generator = ReportGenerator::new(config.output.color_output, true);
            let rendered = generator.render_analysis(&report, &output_format)?;
            emit(&rendered, None)
        }

        Commands::Config { action } => run_config_command(action, config),
    }
}

fn run_config_command(action: Option<ConfigAction>, config: Config) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&config).map_err(|e| {
                JobMatcherError::Configuration(format!("Failed to serialize config: {}", e))
            })?;
            println!("{}", content);
            Ok(())
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults.");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
            Ok(())
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        JobMatcherError::InvalidInput(format!("Failed to parse {}: {}", path.display(), e))
    })
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
