use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

pub mod hf_api;
pub mod parse;
pub mod prompt;

/// Models tried in priority order when no explicit list is configured.
pub const DEFAULT_MODELS: &[&str] = &["openai-community/gpt2", "openai-community/distilgpt2"];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub enum GenerationProvider {
    HuggingFace { api_key: String },
}

#[async_trait]
pub trait TextGenerationService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub models: Vec<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct GenerationClient {
    service: Box<dyn TextGenerationService + Send + Sync>,
    config: ClientConfig,
}

impl GenerationClient {
    pub fn new(provider: GenerationProvider, config: Option<ClientConfig>) -> Self {
        let service: Box<dyn TextGenerationService + Send + Sync> = match provider {
            GenerationProvider::HuggingFace { api_key } => {
                Box::new(hf_api::HuggingFaceService::new(api_key))
            }
        };

        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    /// Builds a client around an already constructed service, bypassing
    /// provider selection.
    pub fn from_service(
        service: Box<dyn TextGenerationService + Send + Sync>,
        config: ClientConfig,
    ) -> Self {
        Self { service, config }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Tries each configured model once, in order, and returns the first
    /// non-empty batch of parsed taglines. A non-success status, a response
    /// that does not match a known shape, a timeout, or a parse that yields
    /// no usable lines all advance to the next model. There is no retry of
    /// the same model; exhausting the list is a terminal failure.
    pub async fn generate_taglines(&self, prompt: &str, count: usize) -> Result<Vec<String>> {
        for model in &self.config.models {
            tracing::info!(model, "requesting tagline generation");

            match timeout(self.config.timeout, self.service.generate(model, prompt)).await {
                Ok(Ok(text)) => {
                    let taglines = parse::split_taglines(&text, count);
                    if taglines.is_empty() {
                        tracing::warn!(model, "model output contained no usable taglines");
                        continue;
                    }
                    return Ok(taglines);
                }
                Ok(Err(e)) => {
                    tracing::warn!(model, error = %e, "generation attempt failed");
                }
                Err(_) => {
                    tracing::warn!(
                        model,
                        timeout = ?self.config.timeout,
                        "generation attempt timed out"
                    );
                }
            }
        }

        Err(anyhow::anyhow!(
            "all {} configured models failed to produce taglines",
            self.config.models.len()
        ))
    }
}
