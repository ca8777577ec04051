//! Search input sanitization
//!
//! Free-text search input reaches the database as part of a full-text
//! query expression. Queries are parameterized regardless; this
//! normalization strips the characters that have meaning to query
//! syntax so a pasted string can never smuggle operators through.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hard cap on sanitized query length, in characters
pub const MAX_QUERY_LENGTH: usize = 500;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[;'"`\\]"#).expect("unsafe-chars pattern is valid"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Sanitize free-text search input
///
/// - removes `;` `'` `"` `` ` `` `\` and every `--` sequence
/// - trims and collapses whitespace runs to single spaces
/// - truncates to [`MAX_QUERY_LENGTH`] characters
///
/// Non-Latin scripts pass through untouched apart from the removals
/// above. Idempotent: sanitizing already-sanitized text is a no-op.
///
/// # Example
/// ```
/// use driftnet_index::search::sanitize_search_input;
/// assert_eq!(sanitize_search_input("test'; DROP TABLE--"), "test DROP TABLE");
/// ```
pub fn sanitize_search_input(input: &str) -> String {
    // Character strip first, then `--`: stripping a character between
    // two dashes may itself form a new `--`
    let stripped = UNSAFE_CHARS.replace_all(input, "");
    let stripped = stripped.replace("--", "");

    let collapsed = WHITESPACE_RUNS.replace_all(stripped.trim(), " ");

    let cut: String = collapsed.chars().take(MAX_QUERY_LENGTH).collect();
    // The cut can land just past a word, leaving a trailing space
    cut.trim_end().to_string()
}
