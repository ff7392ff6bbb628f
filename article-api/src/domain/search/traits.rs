//! Trait definitions for search domain abstractions.
//!
//! These traits enable dependency injection and easy testing through mocking.

use async_trait::async_trait;

use super::predicate::Predicate;
use super::types::{Article, ArticleUrl};

/// Error type for search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Backend credentials or settings are missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request is missing a required parameter.
    #[error("{0}")]
    Validation(String),

    /// The backend call failed. The message is passed through verbatim.
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for SearchError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Configuration(e) => SearchError::Configuration(e.to_string()),
            sqlx::Error::Database(e) => SearchError::Backend(e.message().to_string()),
            other => SearchError::Backend(other.to_string()),
        }
    }
}

impl From<postgrest::PostgrestError> for SearchError {
    fn from(e: postgrest::PostgrestError) -> Self {
        match e {
            postgrest::PostgrestError::Credentials(_) => SearchError::Configuration(e.to_string()),
            other => SearchError::Backend(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Which kind of backend a repository talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum BackendKind {
    #[strum(serialize = "local postgres")]
    Postgres,
    #[strum(serialize = "postgrest")]
    Rest,
    #[strum(serialize = "in-memory")]
    Memory,
}

/// Read access to the `article` table.
///
/// Exactly one implementation is active per process. Implementations never
/// retry and never return partial results.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// `title` and `url` of every article matching `predicate`.
    async fn search(&self, predicate: &Predicate) -> Result<Vec<Article>>;

    /// Up to `limit` article urls, in backend order.
    async fn sample_urls(&self, limit: usize) -> Result<Vec<ArticleUrl>>;

    /// Total number of articles.
    async fn count(&self) -> Result<i64>;

    fn kind(&self) -> BackendKind;
}
