//! Normalized edit-distance similarity between tokens

use strsim::levenshtein;

/// Unit-cost Levenshtein distance, counted in chars
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    levenshtein(a, b)
}

/// Similarity in `[0, 1]`: `1 - distance / max_len`.
///
/// An empty input on either side scores 0, including two empty strings.
/// Comparison is case-sensitive; callers lowercase both sides first.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}
