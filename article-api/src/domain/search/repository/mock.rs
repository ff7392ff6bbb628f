//! Mock repository implementation for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::search::predicate::Predicate;
use crate::domain::search::traits::{ArticleRepository, BackendKind, Result, SearchError};
use crate::domain::search::types::{Article, ArticleUrl, StoredArticle};

/// In-memory repository that evaluates predicates row by row.
///
/// Counts every backend call so tests can assert that a request never
/// reached the backend.
#[derive(Clone, Default)]
pub struct MockArticleRepository {
    rows: Arc<Vec<StoredArticle>>,
    failure: Option<String>,
    call_count: Arc<AtomicUsize>,
}

impl MockArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<StoredArticle>) -> Self {
        Self {
            rows: Arc::new(rows),
            ..Self::default()
        }
    }

    /// A repository whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of calls made against this repository.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<()> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(SearchError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepository {
    async fn search(&self, predicate: &Predicate) -> Result<Vec<Article>> {
        self.record_call()?;

        Ok(self
            .rows
            .iter()
            .filter(|row| predicate.matches(*row))
            .map(Article::from)
            .collect())
    }

    async fn sample_urls(&self, limit: usize) -> Result<Vec<ArticleUrl>> {
        self.record_call()?;

        Ok(self
            .rows
            .iter()
            .take(limit)
            .map(|row| ArticleUrl {
                url: Some(row.url.clone()),
            })
            .collect())
    }

    async fn count(&self) -> Result<i64> {
        self.record_call()?;
        Ok(self.rows.len() as i64)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }
}
