use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use tracing::instrument;

use super::{ApiError, Success};
use crate::{
    domain::search::{extract_filter_request, Article, RegistryEntry, Universe},
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_podcasts))
        .route("/sources", get(list_sources))
}

#[instrument(name = "GET /podcasts", skip(app_state))]
async fn search_podcasts(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Success<Article>, ApiError> {
    let request = extract_filter_request(&params);
    let results = app_state.search_service().search_podcasts(request).await?;
    Ok(Success::results(results))
}

#[instrument(name = "GET /podcasts/sources")]
async fn list_sources() -> Success<&'static RegistryEntry> {
    Success::results(Universe::Podcasts.registry().entries().iter().collect())
}
