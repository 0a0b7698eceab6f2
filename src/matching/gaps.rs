//! Job keywords missing from the whole portfolio

use crate::matching::project::Project;
use std::collections::HashSet;

/// Job keywords with no exact (case-insensitive) counterpart among the skills.
///
/// No fuzzy credit is given here, unlike skill matching. An empty result means
/// the portfolio covers every keyword.
pub fn suggest_gaps(job_keywords: &[String], project_skills: &[String]) -> Vec<String> {
    let covered: HashSet<String> = project_skills.iter().map(|s| s.to_uppercase()).collect();

    job_keywords
        .iter()
        .filter(|keyword| !covered.contains(&keyword.to_uppercase()))
        .cloned()
        .collect()
}

/// [`suggest_gaps`] over the flattened skills of every project
pub fn suggest_gaps_for_projects(job_keywords: &[String], projects: &[Project]) -> Vec<String> {
    let all_skills: Vec<String> = projects
        .iter()
        .flat_map(|p| p.skills.iter().cloned())
        .collect();

    suggest_gaps(job_keywords, &all_skills)
}
