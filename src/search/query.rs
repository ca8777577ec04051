//! Full-text search query construction
//!
//! Turns sanitized free text into a boolean prefix-match expression
//! (`word:* & word:*`) for the search backend. All terms are required;
//! OR, NOT and phrase syntax are deliberately unsupported.

use super::sanitize::sanitize_search_input;

/// Build a prefix-matching boolean query from free text
///
/// Input is sanitized and lowercased, split into words, and each word
/// becomes a `word:*` prefix token; tokens are joined with `" & "`.
///
/// An empty result always means "no filter applied" — callers must
/// skip the search clause entirely, never translate it to "match
/// nothing".
///
/// # Example
/// ```
/// use driftnet_index::search::build_search_query;
/// assert_eq!(build_search_query("Aphex Twin"), "aphex:* & twin:*");
/// assert_eq!(build_search_query("   "), "");
/// ```
pub fn build_search_query(input: &str) -> String {
    let sanitized = sanitize_search_input(input).to_lowercase();

    sanitized
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| format!("{word}:*"))
        .collect::<Vec<_>>()
        .join(" & ")
}
