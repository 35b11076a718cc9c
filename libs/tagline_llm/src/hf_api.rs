use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::TextGenerationService;

pub const HF_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

pub struct HuggingFaceService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HuggingFaceService {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: HF_INFERENCE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

// The inference API answers with either a batch of generations or a bare one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

impl InferenceResponse {
    fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Batch(generations) => {
                generations.into_iter().next().map(|g| g.generated_text)
            }
            InferenceResponse::Single(generation) => Some(generation.generated_text),
        }
    }
}

#[async_trait]
impl TextGenerationService for HuggingFaceService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": prompt }))
            .send()
            .await
            .context("Failed to send request to the inference API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API returned error status: {}, body: {}",
                status,
                error_text
            ));
        }

        let result: InferenceResponse = response
            .json()
            .await
            .context("Failed to parse inference API response")?;

        result
            .into_text()
            .context("Inference API response contained no generated text")
    }
}
