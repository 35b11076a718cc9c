use std::env;
use std::sync::Arc;

use sqlx::SqlitePool;
use tagline_llm::{ClientConfig, GenerationClient, GenerationProvider};

use crate::tagline::tagline_store::TaglineStore;

/// Runtime configuration, read once at startup and passed by reference.
/// Handlers never touch the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub models: Vec<String>,
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let models = env::var("TAGLINE_MODELS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|model| model.trim().to_string())
                    .filter(|model| !model.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|models| !models.is_empty())
            .unwrap_or_else(|| {
                tagline_llm::DEFAULT_MODELS
                    .iter()
                    .map(|model| model.to_string())
                    .collect()
            });

        Self {
            api_key: env::var("HF_API_KEY").unwrap_or_default(),
            models,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:taglines.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
        }
    }
}

#[derive(Clone)]
pub struct AppService {
    pub generation: Arc<GenerationClient>,
}

impl AppService {
    pub fn new(config: &AppConfig) -> Self {
        let generation = GenerationClient::new(
            GenerationProvider::HuggingFace {
                api_key: config.api_key.clone(),
            },
            Some(ClientConfig {
                models: config.models.clone(),
                ..ClientConfig::default()
            }),
        );

        Self {
            generation: Arc::new(generation),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub store: TaglineStore,
}

impl AppState {
    pub fn new(config: &AppConfig, pool: SqlitePool) -> Self {
        Self {
            service: AppService::new(config),
            store: TaglineStore::new(pool),
        }
    }
}
