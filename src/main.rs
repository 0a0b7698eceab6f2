//! Portfolio matcher: fuzzy-match job descriptions against project portfolios

use clap::Parser;
use log::{error, info, warn};
use portfolio_matcher::cli::{Cli, Commands, ConfigAction, HistoryAction};
use portfolio_matcher::config::{parse_output_format, Config, OutputFormat};
use portfolio_matcher::error::{MatcherError, Result};
use portfolio_matcher::history::{History, HistoryEntry};
use portfolio_matcher::input::InputManager;
use portfolio_matcher::matching::{suggest_gaps_for_projects, RankingEngine, SkillMatcher};
use portfolio_matcher::output::ReportGenerator;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

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

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Match {
            projects,
            job,
            output,
            detailed,
            threshold,
            save_history,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut input_manager = InputManager::new();
            let projects = input_manager.load_projects(&projects).await?;
            let job_text = input_manager.load_job_text(&job).await?;

            let threshold = threshold.unwrap_or(config.matching.fuzzy_threshold);
            if !(0.0..=1.0).contains(&threshold) {
                return Err(MatcherError::InvalidInput(format!(
                    "Threshold must be between 0 and 1, got {}",
                    threshold
                )));
            }

            let engine = RankingEngine::with_matcher(SkillMatcher::with_threshold(threshold));
            info!(
                "Matching {} projects (fuzzy threshold {:.2})",
                projects.len(),
                engine.matcher().fuzzy_threshold()
            );
            // An empty portfolio fails here with InvalidInput
            let outcome = engine.rank_projects(&projects, &job_text)?;

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
            );
            println!("{}", generator.generate_report(&outcome, format)?);

            if save_history && !config.history.enabled {
                warn!("History is disabled in the configuration; not saving");
            } else if save_history {
                let mut history = History::load(&config.history.path, config.history.max_entries)?;
                history.record(HistoryEntry::from_outcome(&outcome, &job_text));
                history.save(&config.history.path)?;
                info!("Saved to history ({} entries)", history.len());
            }
        }

        Commands::Suggest {
            projects,
            job,
            limit,
            output,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            // No projects is fine here: every keyword is then a gap
            let mut input_manager = InputManager::new();
            let projects = input_manager.load_projects(&projects).await?;
            let job_text = input_manager.load_job_text(&job).await?;

            let engine = RankingEngine::new();
            let job_keywords = engine.job_keywords(&job_text);
            let gaps = suggest_gaps_for_projects(&job_keywords, &projects);
            info!("{} of {} job keywords not covered", gaps.len(), job_keywords.len());

            let generator = ReportGenerator::with_options(config.output.color_output, false, true);
            let limit = limit.unwrap_or(config.matching.gap_limit);
            println!("{}", generator.generate_gaps(&gaps, limit, format)?);
        }

        Commands::History { action } => {
            let mut history = History::load(&config.history.path, config.history.max_entries)?;
            let generator = ReportGenerator::with_options(config.output.color_output, false, true);

            match action {
                Some(HistoryAction::List) | None => {
                    if history.is_empty() {
                        println!("No saved matches yet.");
                    }
                    for entry in history.entries() {
                        print!("{}", generator.console().format_history_entry(entry));
                    }
                }

                Some(HistoryAction::Show { id }) => {
                    let entry = history
                        .find(&id)
                        .ok_or_else(|| MatcherError::InvalidInput(format!("No history entry with id {}", id)))?;
                    println!("{}", serde_json::to_string_pretty(entry)?);
                }

                Some(HistoryAction::Clear) => {
                    history.clear();
                    history.save(&config.history.path)?;
                    println!("History cleared.");
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults.");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

fn resolve_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => parse_output_format(format).map_err(MatcherError::InvalidInput),
        None => Ok(config.output.format),
    }
}
