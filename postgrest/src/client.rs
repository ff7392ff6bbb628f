use reqwest::{header::HeaderValue, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::{Credentials, CredentialsError, PostgrestFilter, PostgrestURL, SelectQuery};

#[derive(Clone)]
pub struct PostgrestClient {
    base_url: PostgrestURL,
    credentials: Credentials,
    http: reqwest::Client,
}

impl PostgrestClient {
    pub fn new(base_url: PostgrestURL, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            http: reqwest::Client::new(),
        }
    }

    async fn send(
        &self,
        method: Method,
        url: &PostgrestURL,
        prefer: Option<&'static str>,
    ) -> Result<reqwest::Response, PostgrestError> {
        let mut request = self
            .http
            .request(method, url.as_ref())
            .headers(self.credentials.as_headers()?);
        if let Some(prefer) = prefer {
            request = request.header("Prefer", HeaderValue::from_static(prefer));
        }

        let resp = request
            .send()
            .await
            .map_err(|e| PostgrestError::ResponseError(e.to_string()))?;

        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let message = match resp.json::<PostgrestErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };
        Err(PostgrestError::Api { status, message })
    }

    /// `GET /rest/v1/{table}?select=..&{filter}&limit=..`
    #[tracing::instrument(name = "postgrest select", skip(self, filter))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
        filter: &(impl PostgrestFilter + ?Sized),
    ) -> Result<Vec<T>, PostgrestError> {
        let url = select_url(&self.base_url, table, query, filter);
        tracing::debug!(url = url.as_ref(), "querying postgrest");

        let resp = self.send(Method::GET, &url, None).await?;

        resp.json::<Vec<T>>().await.map_err(|e| {
            PostgrestError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Exact row count of `table`, read from the `Content-Range` header.
    #[tracing::instrument(name = "postgrest count", skip(self))]
    pub async fn count(&self, table: &str) -> Result<i64, PostgrestError> {
        let url = self.base_url.table(table).with_param("select", "*");
        let resp = self.send(Method::HEAD, &url, Some("count=exact")).await?;

        let range = resp
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| PostgrestError::ParsingError("Missing Content-Range".to_string()))?;

        parse_content_range_total(range)
    }
}

pub(crate) fn select_url(
    base_url: &PostgrestURL,
    table: &str,
    query: &SelectQuery,
    filter: &(impl PostgrestFilter + ?Sized),
) -> PostgrestURL {
    let mut url = base_url
        .table(table)
        .with_param("select", &query.columns)
        .with_filter(filter);
    if let Some(limit) = query.limit {
        url = url.with_param("limit", &limit.to_string());
    }
    url
}

fn parse_content_range_total(range: &str) -> Result<i64, PostgrestError> {
    range
        .rsplit_once('/')
        .and_then(|(_, total)| total.parse::<i64>().ok())
        .ok_or_else(|| PostgrestError::ParsingError(format!("Bad Content-Range: {}", range)))
}

#[derive(Error, Debug)]
pub enum PostgrestError {
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

/// Error payload returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
}
