//! Direct PostgreSQL repository.

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::domain::search::predicate::Predicate;
use crate::domain::search::render::render_sql;
use crate::domain::search::traits::{ArticleRepository, BackendKind, Result};
use crate::domain::search::types::{Article, ArticleUrl};

/// Repository querying the `article` table over a sqlx pool.
#[derive(Clone)]
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool from a connection string without opening a connection.
    ///
    /// The first query establishes the connection, so an unreachable server
    /// surfaces as a backend error on that query.
    pub fn connect_lazy(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().connect_lazy(dsn)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    #[tracing::instrument(name = "pg search", skip_all)]
    async fn search(&self, predicate: &Predicate) -> Result<Vec<Article>> {
        let fragment = render_sql(predicate);
        let statement = format!("SELECT title, url FROM article{}", fragment.where_clause());
        tracing::debug!(%statement, params = fragment.params.len(), "executing search");

        let mut query = sqlx::query_as::<_, Article>(&statement);
        for param in &fragment.params {
            query = query.bind(param.as_str());
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    #[tracing::instrument(name = "pg sample urls", skip(self))]
    async fn sample_urls(&self, limit: usize) -> Result<Vec<ArticleUrl>> {
        let rows = sqlx::query_as::<_, ArticleUrl>("SELECT url FROM article LIMIT $1")
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    #[tracing::instrument(name = "pg count", skip(self))]
    async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM article")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }
}
