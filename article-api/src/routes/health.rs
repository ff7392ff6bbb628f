use axum::{extract::State, routing::get, Router};
use tracing::instrument;

use super::{ApiError, Success};
use crate::{domain::search::ArticleUrl, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

#[instrument(name = "GET /health", skip(app_state))]
async fn health(State(app_state): State<AppState>) -> Result<Success<ArticleUrl>, ApiError> {
    let urls = app_state.search_service().health().await?;
    Ok(Success::data(urls))
}
