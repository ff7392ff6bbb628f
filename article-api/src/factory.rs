//! Builds the one repository the process talks to.

use std::sync::Arc;

use postgrest::{Credentials, PostgrestClient, PostgrestURL};

use crate::{
    config::BackendSettings,
    domain::search::{
        repository::{PgArticleRepository, RestArticleRepository},
        ArticleRepository, SearchError,
    },
};

/// Create the repository selected by `settings`.
///
/// No connection is opened here; connectivity problems surface on the first
/// query as backend errors.
pub fn create_repository(
    settings: &BackendSettings,
) -> Result<Arc<dyn ArticleRepository>, SearchError> {
    match settings {
        BackendSettings::LocalPostgres { dsn } => {
            tracing::info!("using local postgres backend");
            Ok(Arc::new(PgArticleRepository::connect_lazy(dsn)?))
        }
        BackendSettings::Managed { url, service_key } => {
            tracing::info!(%url, "using postgrest backend");
            let base_url = PostgrestURL::parse(url)
                .map_err(|e| SearchError::Configuration(format!("Invalid SUPABASE_URL: {}", e)))?;
            let credentials = Credentials::new(service_key.as_str())
                .map_err(|e| SearchError::Configuration(e.to_string()))?;

            let client = PostgrestClient::new(base_url, credentials);
            Ok(Arc::new(RestArticleRepository::new(client)))
        }
    }
}
