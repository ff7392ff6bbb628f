//! Search service tying the compiler to the active repository.

use std::sync::Arc;

use super::compiler::{compile_fielded, compile_filter, compile_simple, AllowList};
use super::registry::{EmptySelection, Universe};
use super::traits::{ArticleRepository, BackendKind, Result, SearchError};
use super::types::{Article, ArticleUrl, FilterRequest};

/// Configuration for the search service.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Meaning of an empty `podcast` selection
    pub podcast_empty_selection: EmptySelection,
    /// Meaning of an empty `company` selection
    pub company_empty_selection: EmptySelection,
    /// Number of urls returned by the health probe
    pub health_sample_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            podcast_empty_selection: EmptySelection::All,
            company_empty_selection: EmptySelection::Unfiltered,
            health_sample_limit: 200,
        }
    }
}

/// Search service over a single injected [`ArticleRepository`].
///
/// # Examples
///
/// ```ignore
/// let repository = PgArticleRepository::connect_lazy(&dsn)?;
/// let service = SearchService::with_defaults(Arc::new(repository));
///
/// let results = service.search_podcasts(&request).await?;
/// ```
#[derive(Clone)]
pub struct SearchService {
    repository: Arc<dyn ArticleRepository>,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(repository: Arc<dyn ArticleRepository>, config: SearchConfig) -> Self {
        Self { repository, config }
    }

    pub fn with_defaults(repository: Arc<dyn ArticleRepository>) -> Self {
        Self::new(repository, SearchConfig::default())
    }

    pub fn backend(&self) -> BackendKind {
        self.repository.kind()
    }

    /// Liveness probe: a sample of article urls.
    pub async fn health(&self) -> Result<Vec<ArticleUrl>> {
        self.repository
            .sample_urls(self.config.health_sample_limit)
            .await
    }

    /// Articles whose title or text contains `query`.
    pub async fn simple_search(&self, query: Option<&str>) -> Result<Vec<Article>> {
        let query = query
            .filter(|q| !q.is_empty())
            .ok_or_else(|| SearchError::Validation("Missing query parameter \"q\"".to_string()))?;

        self.repository.search(&compile_simple(query)).await
    }

    /// Articles matching every present `title`, `text` and `url` filter.
    pub async fn fielded_search(&self, request: &FilterRequest) -> Result<Vec<Article>> {
        let predicate = compile_fielded(request).ok_or_else(|| {
            SearchError::Validation(
                "At least one of \"title\", \"text\" or \"url\" is required".to_string(),
            )
        })?;

        self.repository.search(&predicate).await
    }

    /// Advanced search restricted by the company registry.
    pub async fn search_articles(&self, request: FilterRequest) -> Result<Vec<Article>> {
        self.search_in(request, Universe::Companies, self.config.company_empty_selection)
            .await
    }

    /// Advanced search restricted by the podcast registry.
    pub async fn search_podcasts(&self, request: FilterRequest) -> Result<Vec<Article>> {
        self.search_in(request, Universe::Podcasts, self.config.podcast_empty_selection)
            .await
    }

    async fn search_in(
        &self,
        request: FilterRequest,
        universe: Universe,
        empty_selection: EmptySelection,
    ) -> Result<Vec<Article>> {
        let request = request.scoped_to(universe);
        if request.is_empty_query() {
            tracing::debug!(%universe, "empty query, skipping backend");
            return Ok(vec![]);
        }

        let predicate = compile_filter(
            &request,
            Some(AllowList {
                universe,
                empty_selection,
            }),
        );

        self.repository.search(&predicate).await
    }

    /// Total number of articles.
    pub async fn count(&self) -> Result<i64> {
        self.repository.count().await
    }
}
