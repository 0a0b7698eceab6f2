//! Exact and fuzzy classification of a project's skills

use crate::matching::project::FuzzyMatch;
use crate::matching::similarity::similarity;
use log::debug;
use std::collections::HashSet;

/// Minimum similarity for a fuzzy match to count
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.75;

/// Matched and missing skills, each in the project's original order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub fuzzy_matches: Vec<FuzzyMatch>,
}

impl SkillMatch {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn skill_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Matches project skills against job keywords
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    fuzzy_threshold: f64,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        let mut matcher = Self::new();
        matcher.set_fuzzy_threshold(threshold);
        matcher
    }

    /// Set fuzzy matching threshold (0.0 to 1.0)
    pub fn set_fuzzy_threshold(&mut self, threshold: f64) {
        self.fuzzy_threshold = threshold.clamp(0.0, 1.0);
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Classify each skill as matched (exact, then fuzzy) or missing
    pub fn match_skills(&self, skills: &[String], job_keywords: &[String]) -> SkillMatch {
        let mut result = SkillMatch::default();

        let exact: HashSet<String> = job_keywords.iter().map(|k| k.to_uppercase()).collect();
        let lowered: Vec<String> = job_keywords.iter().map(|k| k.to_lowercase()).collect();

        for skill in skills {
            if exact.contains(&skill.to_uppercase()) {
                result.matched.push(skill.clone());
                continue;
            }

            match self.best_fuzzy_candidate(skill, &lowered) {
                Some((index, score)) if score >= self.fuzzy_threshold => {
                    debug!("Fuzzy match {} ~ {} ({:.3})", skill, job_keywords[index], score);
                    result.matched.push(skill.clone());
                    result.fuzzy_matches.push(FuzzyMatch {
                        skill: skill.clone(),
                        keyword: job_keywords[index].clone(),
                        similarity: score,
                    });
                }
                _ => result.missing.push(skill.clone()),
            }
        }

        result
    }

    /// Highest-scoring keyword for a skill; the earliest keyword wins ties
    fn best_fuzzy_candidate(&self, skill: &str, lowered_keywords: &[String]) -> Option<(usize, f64)> {
        let skill = skill.to_lowercase();
        let mut best: Option<(usize, f64)> = None;

        for (index, keyword) in lowered_keywords.iter().enumerate() {
            let score = similarity(&skill, keyword);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        best
    }
}

/// Match skills with the default 0.75 threshold
pub fn match_skills(skills: &[String], job_keywords: &[String]) -> SkillMatch {
    SkillMatcher::new().match_skills(skills, job_keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matcher_creation() {
        let matcher = SkillMatcher::new();
        assert_eq!(matcher.fuzzy_threshold(), 0.75);
        assert_eq!(SkillMatcher::with_threshold(1.7).fuzzy_threshold(), 1.0);
    }

    #[test]
    fn test_exact_match_short_circuit() {
        let result = match_skills(&strings(&["SQL"]), &strings(&["SQL", "KUBERNETES"]));

        assert_eq!(result.matched, vec!["SQL"]);
        assert!(result.missing.is_empty());
        assert!(result.fuzzy_matches.is_empty());
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let result = match_skills(&strings(&["PYTHON"]), &strings(&["python"]));
        assert_eq!(result.matched, vec!["PYTHON"]);
        assert!(result.fuzzy_matches.is_empty());
    }

    #[test]
    fn test_exact_match_ignores_threshold() {
        let matcher = SkillMatcher::with_threshold(1.0);
        let result = matcher.match_skills(&strings(&["GO"]), &strings(&["GO"]));
        assert_eq!(result.matched, vec!["GO"]);
    }

    #[test]
    fn test_fuzzy_match_at_threshold_boundary() {
        // one substitution over four chars is exactly 0.75
        let result = match_skills(&strings(&["ABCD"]), &strings(&["ABCE"]));

        assert_eq!(result.matched, vec!["ABCD"]);
        assert_eq!(result.fuzzy_matches.len(), 1);
        assert_eq!(result.fuzzy_matches[0].keyword, "ABCE");
        assert_eq!(result.fuzzy_matches[0].similarity, 0.75);
    }

    #[test]
    fn test_threshold_just_above_similarity_is_missing() {
        let matcher = SkillMatcher::with_threshold(0.7501);
        let result = matcher.match_skills(&strings(&["ABCD"]), &strings(&["ABCE"]));

        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["ABCD"]);
        assert!(result.fuzzy_matches.is_empty());
    }

    #[test]
    fn test_below_threshold_is_missing() {
        // 1 - 1/3 ≈ 0.667
        let result = match_skills(&strings(&["ABC"]), &strings(&["ABD"]));
        assert_eq!(result.missing, vec!["ABC"]);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_typo_matches_fuzzily() {
        let result = match_skills(&strings(&["KUBERNETES"]), &strings(&["KUBERNETS", "HELM"]));
        assert_eq!(result.matched, vec!["KUBERNETES"]);
        assert_eq!(result.fuzzy_matches[0].keyword, "KUBERNETS");
    }

    #[test]
    fn test_empty_keywords_marks_everything_missing() {
        let result = match_skills(&strings(&["RUST", "SQL"]), &[]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["RUST", "SQL"]);
    }

    #[test]
    fn test_preserves_original_order_and_duplicates() {
        let skills = strings(&["JAVA", "RUST", "COBOL", "RUST", "SQL"]);
        let result = match_skills(&skills, &strings(&["RUST", "SQL"]));

        assert_eq!(result.matched, vec!["RUST", "RUST", "SQL"]);
        assert_eq!(result.missing, vec!["JAVA", "COBOL"]);
        assert_eq!(result.skill_count(), 5);
        assert_eq!(result.matched_count(), 3);
    }
}
