use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use tracing::instrument;

use super::{ApiError, Success};
use crate::{
    domain::search::{
        extract_filter_request, extract_simple_query, Article, RegistryEntry, Universe,
    },
    AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_articles))
        .route("/simple", get(simple_search))
        .route("/fielded", get(fielded_search))
        .route("/companies", get(list_companies))
}

type Params = Query<Vec<(String, String)>>;

#[instrument(name = "GET /search", skip(app_state))]
async fn search_articles(
    State(app_state): State<AppState>,
    Query(params): Params,
) -> Result<Success<Article>, ApiError> {
    let request = extract_filter_request(&params);
    let results = app_state.search_service().search_articles(request).await?;
    Ok(Success::results(results))
}

#[instrument(name = "GET /search/simple", skip(app_state))]
async fn simple_search(
    State(app_state): State<AppState>,
    Query(params): Params,
) -> Result<Success<Article>, ApiError> {
    let query = extract_simple_query(&params);
    let results = app_state
        .search_service()
        .simple_search(query.as_deref())
        .await?;
    Ok(Success::data(results))
}

#[instrument(name = "GET /search/fielded", skip(app_state))]
async fn fielded_search(
    State(app_state): State<AppState>,
    Query(params): Params,
) -> Result<Success<Article>, ApiError> {
    let request = extract_filter_request(&params);
    let results = app_state.search_service().fielded_search(&request).await?;
    Ok(Success::results(results))
}

#[instrument(name = "GET /search/companies")]
async fn list_companies() -> Success<&'static RegistryEntry> {
    Success::results(Universe::Companies.registry().entries().iter().collect())
}
