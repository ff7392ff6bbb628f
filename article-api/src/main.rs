use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_api::{
    config::{read_config, BackendSettings},
    domain::search::SearchService,
    factory::create_repository,
    router, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,article_api=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = read_config().context("Failed to read configuration")?;
    let backend = BackendSettings::from_env().context("Failed to resolve article backend")?;
    let repository = create_repository(&backend).context("Failed to create article repository")?;

    let search_service = SearchService::new(repository, (&config.search).into());
    tracing::info!(backend = %search_service.backend(), "search service ready");

    let app = router::create(AppState::new(search_service), &config);

    let addr = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
