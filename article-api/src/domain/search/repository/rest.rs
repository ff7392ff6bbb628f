//! PostgREST (Supabase) repository.

use async_trait::async_trait;
use postgrest::{NoFilter, PostgrestClient, SelectQuery};

use crate::domain::search::predicate::Predicate;
use crate::domain::search::render::render_rest;
use crate::domain::search::traits::{ArticleRepository, BackendKind, Result};
use crate::domain::search::types::{Article, ArticleUrl};

const TABLE: &str = "article";

#[derive(Clone)]
pub struct RestArticleRepository {
    client: PostgrestClient,
}

impl RestArticleRepository {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleRepository for RestArticleRepository {
    #[tracing::instrument(name = "rest search", skip_all)]
    async fn search(&self, predicate: &Predicate) -> Result<Vec<Article>> {
        let filter = render_rest(predicate);
        tracing::debug!(filter = ?filter.param(), "executing search");

        let rows: Vec<Article> = self
            .client
            .select(TABLE, &SelectQuery::new("title,url"), &filter)
            .await?;

        Ok(rows)
    }

    #[tracing::instrument(name = "rest sample urls", skip(self))]
    async fn sample_urls(&self, limit: usize) -> Result<Vec<ArticleUrl>> {
        let rows: Vec<ArticleUrl> = self
            .client
            .select(TABLE, &SelectQuery::new("url").limit(limit), &NoFilter)
            .await?;

        Ok(rows)
    }

    #[tracing::instrument(name = "rest count", skip(self))]
    async fn count(&self) -> Result<i64> {
        Ok(self.client.count(TABLE).await?)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Rest
    }
}
