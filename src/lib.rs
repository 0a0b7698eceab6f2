//! Portfolio matcher library
//!
//! Fuzzy matching of a job description against project skill profiles.

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use matching::{rank_projects, suggest_gaps, MatchResult, Project, RankedOutcome};
