//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize request paths (drop query/fragment, leading and trailing slash)
//!
//! # Design Decisions
//! - Route paths and requested paths go through the same normalization, so
//!   matching is plain string equality on the result (case-sensitive)
//! - No patterns or params: every route path is a literal
//! - No regex

/// Bring a requested path into the canonical form routes are keyed by.
///
/// `"/preview/?tab=1#top"` becomes `"/preview"`, `""` becomes `"/"`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
