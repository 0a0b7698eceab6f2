//! CLI interface for the portfolio matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-matcher")]
#[command(about = "Fuzzy-match a job description against your project portfolio")]
#[command(long_about = "Score each of your projects against a job description using keyword extraction and Levenshtein-based fuzzy skill matching, and list job keywords your portfolio does not cover")]
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
    /// Rank projects against a job description
    Match {
        /// Project list (CSV or JSON)
        #[arg(short, long)]
        projects: PathBuf,

        /// Job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Show fuzzy match details and job keywords
        #[arg(short, long)]
        detailed: bool,

        /// Override the fuzzy match threshold (0.0 - 1.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Record this run in the match history
        #[arg(long)]
        save_history: bool,
    },

    /// List job keywords none of your projects cover
    Suggest {
        /// Project list (CSV or JSON)
        #[arg(short, long)]
        projects: PathBuf,

        /// Job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Maximum number of suggestions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Saved match history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved runs, newest first
    List,

    /// Show one saved run
    Show {
        /// Entry id
        id: String,
    },

    /// Delete all saved runs
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "matching.fuzzy_threshold")
        key: String,

        /// Configuration value
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::parse_from([
            "portfolio-matcher", "match", "-p", "projects.csv", "-j", "job.txt", "--threshold", "0.8",
        ]);

        match cli.command {
            Commands::Match { projects, threshold, save_history, .. } => {
                assert_eq!(projects, PathBuf::from("projects.csv"));
                assert_eq!(threshold, Some(0.8));
                assert!(!save_history);
            }
            _ => panic!("expected match command"),
        }
    }
}
