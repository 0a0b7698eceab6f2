//! Keyword extraction and normalization

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Filler words dropped from every extraction: conjunctions, articles,
/// prepositions and the usual job-posting boilerplate.
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "to", "with", "a", "an", "for", "in", "of", "on", "is",
    "are", "be", "by", "as", "that", "this", "at", "from", "we", "you", "your",
    "will", "role", "responsible", "experience",
];

/// Turns free text into a deduplicated list of lowercase keyword tokens
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
    noise_regex: Regex,
    separator_regex: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        // Anything that is not an ASCII word char, whitespace or a comma
        let noise_regex = Regex::new(r"[^0-9A-Za-z_\s,]").expect("Invalid noise regex");

        let separator_regex = Regex::new(r"[\s,]+").expect("Invalid separator regex");

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            noise_regex,
            separator_regex,
        }
    }

    /// Extract keywords, keeping first-occurrence order
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let cleaned = self.noise_regex.replace_all(&lowered, " ");

        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for piece in self.separator_regex.split(&cleaned) {
            let token = piece.trim();
            if token.is_empty() || self.is_stop_word(token) {
                continue;
            }
            if seen.insert(token) {
                keywords.push(token.to_string());
            }
        }

        keywords
    }

    /// Same as [`Tokenizer::extract_keywords`], treating absent text as empty
    pub fn extract_optional(&self, text: Option<&str>) -> Vec<String> {
        text.map(|t| self.extract_keywords(t)).unwrap_or_default()
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

fn shared_tokenizer() -> &'static Tokenizer {
    static TOKENIZER: OnceLock<Tokenizer> = OnceLock::new();
    TOKENIZER.get_or_init(Tokenizer::new)
}

/// Extract keywords with the shared default tokenizer
pub fn extract_keywords(text: &str) -> Vec<String> {
    shared_tokenizer().extract_keywords(text)
}

/// Extract keywords and upper-case them into canonical skill form
pub fn extract_skills(text: &str) -> Vec<String> {
    extract_keywords(text)
        .into_iter()
        .map(|k| k.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_extraction() {
        let keywords = extract_keywords("Looking for Python and SQL engineer");
        assert_eq!(keywords, vec!["looking", "python", "sql", "engineer"]);
    }

    #[test]
    fn test_empty_and_absent_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.extract_keywords("").is_empty());
        assert!(tokenizer.extract_optional(None).is_empty());
        assert!(tokenizer.extract_optional(Some("")).is_empty());
    }

    #[test]
    fn test_punctuation_and_whitespace_only() {
        assert!(extract_keywords("!!! ... ;;; ---").is_empty());
        assert!(extract_keywords("   \t\n  ").is_empty());
        assert!(extract_keywords(",,, , ,").is_empty());
    }

    #[test]
    fn test_deduplicates_preserving_first_occurrence() {
        let keywords = extract_keywords("Rust, rust RUST docker, Rust");
        assert_eq!(keywords, vec!["rust", "docker"]);
    }

    #[test]
    fn test_stop_words_removed() {
        let text = "You will be responsible for the role with experience in Kubernetes";
        let keywords = extract_keywords(text);
        assert_eq!(keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        // "node.js" and "c++" lose their punctuation
        let keywords = extract_keywords("Node.js; C++/Go (required)");
        assert_eq!(keywords, vec!["node", "js", "c", "go", "required"]);
    }

    #[test]
    fn test_underscore_is_a_word_char() {
        let keywords = extract_keywords("snake_case identifiers");
        assert_eq!(keywords, vec!["snake_case", "identifiers"]);
    }

    #[test]
    fn test_output_invariants() {
        let samples = [
            "The quick, brown fox; and the LAZY dog... at 9am!!",
            "a an the, and or -- with WITH With",
            "Senior Rust/Go engineer @ ACME (remote), rust, GO",
        ];

        for text in samples {
            let keywords = extract_keywords(text);
            let unique: HashSet<&String> = keywords.iter().collect();
            assert_eq!(unique.len(), keywords.len(), "duplicates in {:?}", keywords);
            assert!(keywords.iter().all(|k| !k.is_empty()));
            assert!(keywords.iter().all(|k| !STOP_WORDS.contains(&k.as_str())));
        }
    }

    #[test]
    fn test_extract_skills_uppercases() {
        assert_eq!(extract_skills("python, sql; react"), vec!["PYTHON", "SQL", "REACT"]);
    }
}
