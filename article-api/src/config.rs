use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

use crate::domain::search::{EmptySelection, SearchConfig, SearchError};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub search: SearchSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Origin allowed by CORS; any origin when unset.
    pub allowed_origin: Option<String>,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    pub podcast_empty_selection: EmptySelection,
    pub company_empty_selection: EmptySelection,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub health_sample_limit: usize,
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            podcast_empty_selection: settings.podcast_empty_selection,
            company_empty_selection: settings.company_empty_selection,
            health_sample_limit: settings.health_sample_limit,
        }
    }
}

/// Which backend the process talks to, read from the environment.
///
/// `LOCAL_POSTGRES_DSN` selects a direct connection. Otherwise the managed
/// REST backend is used, which needs `SUPABASE_URL` and
/// `SUPABASE_SERVICE_ROLE_KEY`. Resolved once at startup, so missing
/// variables stop the process instead of failing the first request.
#[derive(Clone)]
pub enum BackendSettings {
    LocalPostgres { dsn: String },
    Managed { url: String, service_key: String },
}

impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalPostgres { .. } => f.write_str("LocalPostgres"),
            Self::Managed { url, .. } => f.debug_struct("Managed").field("url", url).finish(),
        }
    }
}

impl BackendSettings {
    pub fn from_env() -> Result<Self, SearchError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SearchError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(dsn) = non_empty("LOCAL_POSTGRES_DSN") {
            return Ok(Self::LocalPostgres { dsn });
        }

        let url = non_empty("SUPABASE_URL");
        let service_key = non_empty("SUPABASE_SERVICE_ROLE_KEY");
        match (url, service_key) {
            (Some(url), Some(service_key)) => Ok(Self::Managed { url, service_key }),
            (url, key) => {
                let missing: Vec<&str> = [
                    ("SUPABASE_URL", url.is_none()),
                    ("SUPABASE_SERVICE_ROLE_KEY", key.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                Err(SearchError::Configuration(format!(
                    "Supabase is not configured: missing {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no current directory: {}", e)))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|_| config::ConfigError::Message("Failed to parse APP_ENVIRONMENT".into()))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("ARTICLE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
