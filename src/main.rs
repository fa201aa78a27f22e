//! Resume tailor: keyword extraction and resume tailoring CLI

mod cli;
mod config;
mod distribution;
mod error;
mod extraction;
mod output;
mod pipeline;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TailorError};
use extraction::KeywordExtractor;
use log::{error, info};
use pipeline::{CandidateProfile, JobInfo, Pipeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
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

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tailor {
            resume,
            job,
            url,
            output,
            save,
            seed,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| TailorError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| TailorError::InvalidInput(format!("Job posting file: {}", e)))?;
            let output_format =
                output::parse_output_format(&output).map_err(TailorError::InvalidInput)?;

            info!("Reading resume from {}", resume.display());
            let resume_text = std::fs::read_to_string(&resume)?;
            info!("Reading job posting from {}", job.display());
            let job_text = std::fs::read_to_string(&job)?;

            let job_info = JobInfo {
                description: job_text,
                url,
                ..Default::default()
            };
            let profile = CandidateProfile::default();

            let pipeline = Pipeline::new(config);
            let result = match seed {
                Some(seed) => {
                    pipeline.run(&job_info, &profile, &resume_text, &mut StdRng::seed_from_u64(seed))
                }
                None => pipeline.run(&job_info, &profile, &resume_text, &mut rand::thread_rng()),
            };

            print!("{}", output::format_result(&result, output_format, !no_color)?);

            if let Some(path) = save {
                std::fs::write(&path, &result.tailored_resume)?;
                info!("Tailored resume written to {}", path.display());
            }

            if !result.success {
                process::exit(2);
            }
            Ok(())
        }

        Commands::Extract { job, max_keywords } => {
            let job_text = std::fs::read_to_string(&job)?;
            let extractor = KeywordExtractor::new();
            let keywords = extractor.extract(
                &job_text,
                max_keywords.unwrap_or(config.extraction.max_keywords),
            );
            print!("{}", output::format_keywords(&keywords));
            Ok(())
        }

        Commands::Config => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| TailorError::Configuration(format!("Failed to render config: {}", e)))?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
