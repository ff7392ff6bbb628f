//! Connectivity check for the configured article backend.
//!
//! Prints which backend variables are set, a few sample urls and the total
//! number of articles. Exits non-zero on any failure.

use std::process::ExitCode;

use article_api::{
    config::BackendSettings,
    domain::search::{SearchConfig, SearchService},
    factory::create_repository,
};

const SAMPLE_SIZE: usize = 5;
const VARIABLES: [&str; 3] = [
    "LOCAL_POSTGRES_DSN",
    "SUPABASE_URL",
    "SUPABASE_SERVICE_ROLE_KEY",
];

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    for name in VARIABLES {
        let state = match std::env::var(name) {
            Ok(value) if !value.is_empty() => "set",
            _ => "not set",
        };
        println!("{}: {}", name, state);
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = BackendSettings::from_env()?;
    let config = SearchConfig {
        health_sample_limit: SAMPLE_SIZE,
        ..SearchConfig::default()
    };
    let service = SearchService::new(create_repository(&settings)?, config);
    println!("Backend: {}", service.backend());

    let urls = service.health().await?;
    println!("Sample urls:");
    for article in &urls {
        println!("  {}", article.url.as_deref().unwrap_or("<no url>"));
    }

    let count = service.count().await?;
    println!("Total articles: {}", count);

    Ok(())
}
