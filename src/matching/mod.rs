//! Keyword extraction, fuzzy skill matching and project ranking

pub mod tokenizer;
pub mod similarity;
pub mod skill_matcher;
pub mod project;
pub mod ranking;
pub mod gaps;

pub use gaps::{suggest_gaps, suggest_gaps_for_projects};
pub use project::{FuzzyMatch, MatchResult, Project, RankedOutcome};
pub use ranking::{rank_projects, RankingEngine};
pub use similarity::{edit_distance, similarity};
pub use skill_matcher::{match_skills, SkillMatch, SkillMatcher, DEFAULT_FUZZY_THRESHOLD};
pub use tokenizer::{extract_keywords, extract_skills, Tokenizer};
