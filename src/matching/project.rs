//! Project profiles and match results

use crate::error::{MatcherError, Result};
use crate::matching::tokenizer::extract_skills;
use serde::{Deserialize, Serialize};

pub const UNTITLED_PROJECT: &str = "Untitled Project";

/// A user-authored project with its canonical (upper-cased) skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Build a project from already-canonical skills
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        skills: Vec<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            skills,
            description,
        }
    }

    /// Build a project from free-form skill text ("rust, sql; docker").
    ///
    /// Skills are tokenized and upper-cased. A blank title falls back to
    /// [`UNTITLED_PROJECT`] and a blank description is dropped.
    pub fn from_raw(id: impl Into<String>, title: &str, skills_text: &str, description: &str) -> Result<Self> {
        let skills = extract_skills(skills_text);
        if skills.is_empty() {
            return Err(MatcherError::InvalidInput(
                "Add at least one skill (comma or space separated)".to_string(),
            ));
        }

        let title = match title.trim() {
            "" => UNTITLED_PROJECT.to_string(),
            t => t.to_string(),
        };

        let description = Some(description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self::new(id, title, skills, description))
    }
}

/// A skill accepted through the fuzzy path, with the keyword that carried it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub skill: String,
    pub keyword: String,
    pub similarity: f64,
}

/// Outcome of matching one project against a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub project_id: String,
    pub title: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub fuzzy_matches: Vec<FuzzyMatch>,
    /// Percentage of skills matched, 0-100
    pub score: u8,
}

/// Every project's result sorted by score, plus the designated best one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedOutcome {
    pub results: Vec<MatchResult>,
    pub best: MatchResult,
    pub job_keywords: Vec<String>,
}
