//! Renderers turning a [`Predicate`](super::predicate::Predicate) into
//! backend syntax.
//!
//! Both renderers agree on keyword semantics: `%` and `_` are literal
//! characters and `*` is a wildcard.

#[cfg(test)]
mod equivalence;
mod rest;
mod sql;

pub use rest::{render_rest, RestFilter};
pub use sql::{render_sql, SqlFragment};

/// Escape `LIKE` metacharacters so the keyword is matched literally.
pub(crate) fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
