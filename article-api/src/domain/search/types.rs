//! Core types for the search domain.

use serde::{Deserialize, Serialize};

use super::predicate::{Field, FieldValues};
use super::registry::Universe;

/// Row returned by every search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Row returned by the health probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleUrl {
    pub url: Option<String>,
}

/// A full `article` row, as stored. Only used by the in-memory repository
/// and tests; the real backends never return `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArticle {
    pub title: String,
    pub url: String,
    pub text: String,
}

impl StoredArticle {
    pub fn new(title: impl Into<String>, url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            text: text.into(),
        }
    }
}

impl FieldValues for StoredArticle {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Text => &self.text,
            Field::Url => &self.url,
        }
    }
}

impl From<&StoredArticle> for Article {
    fn from(row: &StoredArticle) -> Self {
        Self {
            title: Some(row.title.clone()),
            url: Some(row.url.clone()),
        }
    }
}

/// Normalized shape of one search request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    /// Each entry is a `|`-delimited list of keywords that must all match.
    pub or_groups: Vec<String>,
    /// Keywords that must not appear in `text`.
    pub excludes: Vec<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Only used by the fielded search.
    pub text: Option<String>,
    pub podcasts: Vec<String>,
    pub companies: Vec<String>,
}

impl FilterRequest {
    /// True when there is nothing to filter on at all.
    pub fn is_empty_query(&self) -> bool {
        self.or_groups.is_empty()
            && self.excludes.is_empty()
            && self.title.is_none()
            && self.url.is_none()
            && self.text.is_none()
            && self.podcasts.is_empty()
            && self.companies.is_empty()
    }

    /// Drops the parameters an endpoint of the given universe does not take.
    pub fn scoped_to(mut self, universe: Universe) -> Self {
        self.text = None;
        match universe {
            Universe::Podcasts => {
                self.url = None;
                self.companies.clear();
            }
            Universe::Companies => self.podcasts.clear(),
        }
        self
    }

    /// Keys selected for the given registry.
    pub fn selection(&self, universe: Universe) -> &[String] {
        match universe {
            Universe::Podcasts => &self.podcasts,
            Universe::Companies => &self.companies,
        }
    }
}
