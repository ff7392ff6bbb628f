//! PostgREST logic-tree renderer.
//!
//! A predicate becomes a single `and=(...)` query parameter, e.g.
//! `and=(or(and(text.ilike.*kafka*,text.ilike.*latency*),text.ilike.*grpc*),text.not.ilike.*deprecated*)`.

use postgrest::PostgrestFilter;

use super::escape_like;
use crate::domain::search::predicate::Predicate;

/// Characters with a meaning in the logic-tree syntax. Values containing any
/// of them are double-quoted.
const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\'];

/// A rendered filter parameter, or nothing for a predicate that matches
/// every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestFilter(Option<(String, String)>);

impl RestFilter {
    pub fn param(&self) -> Option<(&str, &str)> {
        self.0
            .as_ref()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl PostgrestFilter for RestFilter {
    fn as_postgrest_filter(&self) -> Option<(String, String)> {
        self.0.clone()
    }
}

pub fn render_rest(predicate: &Predicate) -> RestFilter {
    let value = match predicate {
        Predicate::True => return RestFilter(None),
        Predicate::And(parts) => list(parts),
        other => format!("({})", node(other)),
    };

    RestFilter(Some(("and".to_string(), value)))
}

fn node(predicate: &Predicate) -> String {
    match predicate {
        Predicate::Contains { field, keyword } => {
            format!("{}.ilike.{}", field.column(), pattern(keyword))
        }
        Predicate::Not(inner) => match inner.as_ref() {
            Predicate::Contains { field, keyword } => {
                format!("{}.not.ilike.{}", field.column(), pattern(keyword))
            }
            Predicate::Not(inner) => node(inner),
            other => format!("not.{}", node(other)),
        },
        Predicate::And(parts) => format!("and{}", list(parts)),
        Predicate::Or(parts) => format!("or{}", list(parts)),
        // Only reachable for a hand-built tree: the smart constructors never
        // nest `True`. The logic-tree syntax has no literal for it, so emit an
        // empty conjunction and let the backend reject it.
        Predicate::True => "and()".to_string(),
    }
}

fn list(parts: &[Predicate]) -> String {
    let rendered: Vec<String> = parts.iter().map(node).collect();
    format!("({})", rendered.join(","))
}

/// `*keyword*` with LIKE metacharacters escaped, quoted when needed.
fn pattern(keyword: &str) -> String {
    let raw = format!("*{}*", escape_like(keyword));

    if raw.chars().any(|c| RESERVED.contains(&c) || c.is_whitespace()) {
        let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    } else {
        raw
    }
}
