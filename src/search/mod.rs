//! Search input handling: sanitization and query construction

pub mod query;
pub mod sanitize;

pub use query::build_search_query;
pub use sanitize::{sanitize_search_input, MAX_QUERY_LENGTH};
