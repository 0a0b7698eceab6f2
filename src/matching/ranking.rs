//! Ranking of projects against a job description

use crate::error::{MatcherError, Result};
use crate::matching::project::{MatchResult, Project, RankedOutcome};
use crate::matching::skill_matcher::SkillMatcher;
use crate::matching::tokenizer::Tokenizer;
use log::debug;

/// Scores every project against job text and picks the best one
pub struct RankingEngine {
    tokenizer: Tokenizer,
    matcher: SkillMatcher,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::with_matcher(SkillMatcher::new())
    }

    pub fn with_matcher(matcher: SkillMatcher) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            matcher,
        }
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    /// Upper-cased keywords of a job description
    pub fn job_keywords(&self, job_text: &str) -> Vec<String> {
        self.tokenizer
            .extract_keywords(job_text)
            .into_iter()
            .map(|k| k.to_uppercase())
            .collect()
    }

    /// Rank projects by the share of their skills found in the job text.
    ///
    /// Fails with `InvalidInput` when `projects` is empty, since there is no
    /// best project to report.
    pub fn rank_projects(&self, projects: &[Project], job_text: &str) -> Result<RankedOutcome> {
        if projects.is_empty() {
            return Err(MatcherError::InvalidInput(
                "Add at least one project to match against".to_string(),
            ));
        }

        let job_keywords = self.job_keywords(job_text);
        debug!("Extracted {} job keywords", job_keywords.len());

        let scored: Vec<MatchResult> = projects
            .iter()
            .map(|project| self.score_project(project, &job_keywords))
            .collect();

        // Earliest project wins ties: only a strictly higher score replaces it
        let best = scored
            .iter()
            .skip(1)
            .fold(&scored[0], |current, candidate| {
                if candidate.score > current.score {
                    candidate
                } else {
                    current
                }
            })
            .clone();

        let mut results = scored;
        results.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(RankedOutcome {
            results,
            best,
            job_keywords,
        })
    }

    /// Match a single project against pre-tokenized job keywords
    pub fn score_project(&self, project: &Project, job_keywords: &[String]) -> MatchResult {
        let skill_match = self.matcher.match_skills(&project.skills, job_keywords);
        let score = percentage(skill_match.matched_count(), project.skills.len());

        debug!(
            "Project '{}': {}/{} skills matched ({}%)",
            project.title,
            skill_match.matched_count(),
            project.skills.len(),
            score
        );

        MatchResult {
            project_id: project.id.clone(),
            title: project.title.clone(),
            skills: project.skills.clone(),
            description: project.description.clone(),
            matched: skill_match.matched,
            missing: skill_match.missing,
            fuzzy_matches: skill_match.fuzzy_matches,
            score,
        }
    }
}

/// `round(matched / max(total, 1) * 100)`, halves rounded up
fn percentage(matched: usize, total: usize) -> u8 {
    let ratio = matched as f64 / total.max(1) as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Rank projects with the default tokenizer and 0.75 fuzzy threshold
pub fn rank_projects(projects: &[Project], job_text: &str) -> Result<RankedOutcome> {
    RankingEngine::new().rank_projects(projects, job_text)
}
