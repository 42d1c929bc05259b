//! Fuzzy branch-name matching.
//!
//! A single best-effort heuristic: score every candidate by string
//! similarity to the requested name (case-insensitive), pick the highest,
//! and let the caller decide whether the score clears the acceptance
//! threshold. Substring containment is the cheaper second pass.

use strsim::normalized_levenshtein;

/// Case-insensitive similarity ratio between two strings, in `0.0..=1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_uppercase(), &b.to_uppercase())
}

/// Returns the candidate most similar to `query`, with its score.
pub fn best_match<'a>(query: &str, candidates: &'a [String]) -> Option<(&'a str, f64)> {
    candidates
        .iter()
        .map(|candidate| (candidate.as_str(), similarity(query, candidate)))
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
}

/// Candidates containing `query` as a case-insensitive substring.
pub fn substring_matches<'a>(query: &str, candidates: &'a [String]) -> Vec<&'a str> {
    let needle = query.to_uppercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_uppercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
