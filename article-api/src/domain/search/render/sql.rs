//! Parameterized SQL renderer for PostgreSQL.
//!
//! User input only ever ends up in [`SqlFragment::params`]; the SQL text
//! contains column names from [`Field`](crate::domain::search::predicate::Field)
//! and `$n` placeholders.

use itertools::Itertools;

use super::escape_like;
use crate::domain::search::predicate::Predicate;

/// A WHERE-clause body with its bind parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFragment {
    pub sql: String,
    pub params: Vec<String>,
}

impl SqlFragment {
    /// ` WHERE <sql>`, or an empty string when the fragment is trivially true.
    pub fn where_clause(&self) -> String {
        if self.sql == "TRUE" {
            String::new()
        } else {
            format!(" WHERE {}", self.sql)
        }
    }
}

pub fn render_sql(predicate: &Predicate) -> SqlFragment {
    let mut params = Vec::new();
    let sql = node(predicate, &mut params);
    SqlFragment { sql, params }
}

fn node(predicate: &Predicate, params: &mut Vec<String>) -> String {
    match predicate {
        Predicate::True => "TRUE".to_string(),
        Predicate::Contains { field, keyword } => {
            params.push(like_pattern(keyword));
            format!("{} ILIKE ${}", field.column(), params.len())
        }
        Predicate::Not(inner) => format!("NOT ({})", node(inner, params)),
        Predicate::And(parts) => join(parts, " AND ", "TRUE", params),
        Predicate::Or(parts) => join(parts, " OR ", "FALSE", params),
    }
}

fn join(parts: &[Predicate], separator: &str, empty: &str, params: &mut Vec<String>) -> String {
    if parts.is_empty() {
        return empty.to_string();
    }

    format!("({})", parts.iter().map(|part| node(part, params)).join(separator))
}

/// `%keyword%` with LIKE metacharacters escaped and `*` as a wildcard.
fn like_pattern(keyword: &str) -> String {
    format!("%{}%", escape_like(keyword).replace('*', "%"))
}
