//! resume-ats: keyword-based ATS scoring for resumes

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::file_detector::SUPPORTED_EXTENSIONS;
use resume_ats::input::InputManager;
use resume_ats::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_ats::output::report::{AnalysisReport, KeywordDetails, RankingReport};
use resume_ats::processing::{suggest_improvements, AtsScorer};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting ATS analysis");

            validate_input(&resume, "Resume file")?;
            validate_input(&job, "Job description file")?;
            let output_format = resolve_format(output.as_deref(), &config)?;
            let detailed = detailed || config.output.detailed;
            let save = save.map(|path| {
                if path.is_dir() {
                    path.join(suggest_filename(&output_format, &resume.to_string_lossy(), true))
                } else {
                    path
                }
            });

            let started = Instant::now();
            let mut input_manager = InputManager::from_config(&config.input);
            let resume_text = input_manager.extract_text(&resume).await?;
            let job_text = input_manager.extract_text(&job).await?;

            let scorer = AtsScorer::with_extractor(config.extractor());
            let score = scorer.score(&resume_text, &job_text);

            let mut report = AnalysisReport::new(
                resume.display().to_string(),
                job.display().to_string(),
                score,
                started.elapsed().as_millis() as u64,
            );

            if detailed {
                report = report.with_keyword_details(KeywordDetails {
                    resume_keywords: scorer.extractor().rank(&resume_text),
                    job_keywords: scorer.extractor().rank(&job_text),
                });
                info!("Resume preview: {}", truncate_text(&resume_text, 120));
                info!("Job description preview: {}", truncate_text(&job_text, 120));
            }

            info!(
                "ATS score: {}% ({})",
                report.score.match_percentage, report.score_level
            );

            let generator =
                ReportGenerator::with_options(config.output.color_output && save.is_none(), detailed, true);
            let content = generator.generate_report(&report, &output_format)?;
            emit(&content, save.as_deref())?;
        }

        Commands::Rank {
            resume,
            jobs,
            output,
        } => {
            validate_input(&resume, "Resume file")?;
            for job in &jobs {
                validate_input(job, "Job description file")?;
            }
            let output_format = resolve_format(output.as_deref(), &config)?;

            let started = Instant::now();
            let mut input_manager = InputManager::from_config(&config.input);
            let resume_text = Arc::new(input_manager.extract_text(&resume).await?);
            let scorer = Arc::new(AtsScorer::with_extractor(config.extractor()));

            let progress = ProgressBar::new(jobs.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                    .map_err(|e| ResumeAtsError::OutputFormatting(e.to_string()))?
                    .progress_chars("=> "),
            );

            // Score each job on the blocking pool
            let mut handles = Vec::with_capacity(jobs.len());
            for job in &jobs {
                let job_text = input_manager.extract_text(job).await?;
                let resume_text = Arc::clone(&resume_text);
                let scorer = Arc::clone(&scorer);
                handles.push((
                    job.display().to_string(),
                    tokio::task::spawn_blocking(move || scorer.score(&resume_text, &job_text)),
                ));
            }

            let mut scored = Vec::with_capacity(handles.len());
            for (job_file, handle) in handles {
                progress.set_message(job_file.clone());
                let score = handle
                    .await
                    .with_context(|| format!("Scoring task for {} failed", job_file))?;
                scored.push((job_file, score));
                progress.inc(1);
            }
            progress.finish_and_clear();

            let report = RankingReport::new(
                resume.display().to_string(),
                scored,
                started.elapsed().as_millis() as u64,
            );
            if let Some(best) = report.best_match() {
                info!("Best match: {} ({}%)", best.job_file, best.match_percentage);
            }

            let generator = ReportGenerator::with_options(config.output.color_output, false, true);
            let content = generator.generate_ranking(&report, &output_format)?;
            emit(&content, None)?;
        }

        Commands::Keywords {
            file,
            limit,
            counts,
        } => {
            validate_input(&file, "Input file")?;

            let mut input_manager = InputManager::from_config(&config.input);
            let text = input_manager.extract_text(&file).await?;
            let ranking = config.extractor().rank(&text);

            if ranking.is_empty() {
                warn!("No keywords found in {}", file.display());
            }

            let shown = limit.unwrap_or(ranking.len());
            for (i, entry) in ranking.iter().take(shown).enumerate() {
                if counts {
                    println!("{:>3}. {} ({})", i + 1, entry.keyword, entry.count);
                } else {
                    println!("{:>3}. {}", i + 1, entry.keyword);
                }
            }
        }

        Commands::Advise {
            score,
            missing,
            output,
        } => {
            let output_format = resolve_format(output.as_deref(), &config)?;
            let suggestions = suggest_improvements(score, missing.len(), &missing);

            let generator = ReportGenerator::with_options(config.output.color_output, false, true);
            let content = generator.generate_suggestions(score, &suggestions, &output_format)?;
            emit(&content, None)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Extraction:");
                println!("  Minimum keyword length: {}", config.extraction.min_length);
                if config.extraction.extra_stop_words.is_empty() {
                    println!("  Extra stop words: (none)");
                } else {
                    println!("  Extra stop words: {}", config.extraction.extra_stop_words.join(", "));
                }
                println!("\nInput:");
                println!("  Max file size: {} bytes", config.input.max_file_bytes);
                println!("  Cache enabled: {}", config.input.enable_cache);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(&config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn validate_input(path: &Path, label: &str) -> Result<()> {
    cli::validate_file_extension(path, SUPPORTED_EXTENSIONS)
        .map_err(|e| ResumeAtsError::InvalidInput(format!("{}: {}", label, e)))
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => cli::parse_output_format(format).map_err(ResumeAtsError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("📁 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Truncate text to a maximum number of graphemes, ending on a word boundary
fn truncate_text(text: &str, max_graphemes: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.graphemes(true).count() <= max_graphemes {
        return flattened;
    }

    let truncated: String = flattened.graphemes(true).take(max_graphemes).collect();
    let cut = truncated.rfind(' ').unwrap_or(truncated.len());
    format!("{}...", &truncated[..cut])
}
