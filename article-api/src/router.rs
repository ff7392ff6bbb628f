use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let api = Router::new()
        .nest("/health", routes::health::router())
        .nest("/search", routes::search::router())
        .nest("/podcasts", routes::podcasts::router());

    let base_app = Router::new()
        .route("/", get(|| async { "article search" }))
        .nest("/api", api);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origin(config.application.allowed_origin.as_deref()));

    base_app
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn allowed_origin(origin: Option<&str>) -> AllowOrigin {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            tracing::warn!("allowed_origin is not a valid header value, allowing any origin");
            Any.into()
        }
        None => Any.into(),
    }
}
