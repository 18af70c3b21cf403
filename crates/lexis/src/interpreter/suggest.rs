//! "Did you mean" suggestions for unknown keys.

use strsim::levenshtein;

const MAX_SUGGESTIONS: usize = 3;

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for keys of 3 characters or fewer
/// - distance <= 2 for longer keys
/// - exact matches are never suggested
/// - at most 3 suggestions, closest first, ties in input order
///
/// ```
/// use lexis::interpreter::compute_suggestions;
///
/// let keys = ["menu.open", "menu.close", "menu.save"];
/// assert_eq!(compute_suggestions("menu.opne", &keys), ["menu.open"]);
/// assert!(compute_suggestions("settings", &keys).is_empty());
/// ```
pub fn compute_suggestions<S: AsRef<str>>(name: &str, available: &[S]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist > 0 && dist <= max_distance).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.dedup_by(|a, b| a.1 == b.1);
    suggestions
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
