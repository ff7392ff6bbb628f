//! Backend-agnostic boolean filter tree.
//!
//! Every search is compiled into a [`Predicate`] once and then handed to a
//! renderer for the active backend. The tree is small and is rebuilt per
//! request.

use strum::{Display, EnumString};

/// Searchable columns of the `article` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Title,
    Text,
    Url,
}

impl Field {
    /// Column name; identical for SQL and PostgREST.
    pub fn column(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Text => "text",
            Field::Url => "url",
        }
    }
}

/// Access to the values of a row, used to evaluate a predicate in memory.
pub trait FieldValues {
    fn value(&self, field: Field) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every row.
    True,
    /// Case-insensitive substring match (`field ILIKE %keyword%`).
    /// `*` inside the keyword is a wildcard.
    Contains { field: Field, keyword: String },
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn contains(field: Field, keyword: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            keyword: keyword.into(),
        }
    }

    /// Conjunction. `True` operands are dropped, nested conjunctions are
    /// flattened and a single operand is returned as is.
    pub fn all(parts: impl IntoIterator<Item = Predicate>) -> Self {
        let mut flat = Vec::new();
        for part in parts {
            match part {
                Predicate::True => {}
                Predicate::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        match flat.len() {
            0 => Predicate::True,
            1 => flat.remove(0),
            _ => Predicate::And(flat),
        }
    }

    /// Disjunction. Any `True` operand makes the whole disjunction `True`.
    ///
    /// Callers never pass an empty list; an empty disjunction matches nothing.
    pub fn any(parts: impl IntoIterator<Item = Predicate>) -> Self {
        let mut flat = Vec::new();
        for part in parts {
            match part {
                Predicate::True => return Predicate::True,
                Predicate::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }

        match flat.len() {
            1 => flat.remove(0),
            _ => Predicate::Or(flat),
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Predicate::True)
    }

    /// Evaluates the predicate against a single row.
    pub fn matches(&self, row: &impl FieldValues) -> bool {
        match self {
            Predicate::True => true,
            Predicate::Contains { field, keyword } => ilike_contains(row.value(*field), keyword),
            Predicate::Not(inner) => !inner.matches(row),
            Predicate::And(parts) => parts.iter().all(|p| p.matches(row)),
            Predicate::Or(parts) => parts.iter().any(|p| p.matches(row)),
        }
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }
}

/// `haystack ILIKE '%keyword%'` where `*` in `keyword` is a wildcard.
fn ilike_contains(haystack: &str, keyword: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let keyword = keyword.to_lowercase();

    let mut rest = haystack.as_str();
    for piece in keyword.split('*') {
        match rest.find(piece) {
            Some(pos) => rest = &rest[pos + piece.len()..],
            None => return false,
        }
    }
    true
}
