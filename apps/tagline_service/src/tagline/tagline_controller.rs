use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tagline_llm::prompt::TaglinePrompt;

use crate::app_module::AppState;
use crate::tagline::tagline_store::NewTagline;

fn default_tone() -> String {
    "professional".to_string()
}

fn default_count() -> usize {
    3
}

/// Aliases accept both field spellings the frontends send
/// (`product`/`name`, `count`/`numTaglines`).
#[derive(Debug, Deserialize)]
pub struct GenerateTaglinesRequest {
    #[serde(default, alias = "name")]
    pub product: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_count", alias = "numTaglines")]
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateTaglinesResponse {
    pub taglines: Vec<String>,
}

pub fn tagline_router() -> Router {
    Router::new()
        .route("/generate", post(generate_taglines))
        .route("/history", get(tagline_history))
}

pub async fn generate_taglines(
    Extension(state): Extension<AppState>,
    Json(request): Json<GenerateTaglinesRequest>,
) -> impl IntoResponse {
    let prompt = TaglinePrompt::build(
        &request.product,
        &request.description,
        &request.audience,
        &request.tone,
        request.count,
    );

    let taglines = match state
        .service
        .generation
        .generate_taglines(&prompt, request.count)
        .await
    {
        Ok(taglines) => taglines,
        Err(e) => {
            tracing::error!("Tagline generation failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "All configured models failed to generate taglines"
                })),
            );
        }
    };

    // One row per tagline. A rejected write aborts the request rather than
    // silently returning unpersisted results.
    for tagline in &taglines {
        if let Err(e) = state
            .store
            .insert(NewTagline {
                product_name: &request.product,
                description: &request.description,
                audience: &request.audience,
                tone: &request.tone,
                tagline,
            })
            .await
        {
            tracing::error!("Failed to persist tagline: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Failed to store generated taglines: {}", e)
                })),
            );
        }
    }

    let response = GenerateTaglinesResponse { taglines };
    match serde_json::to_value(response) {
        Ok(json_value) => (StatusCode::OK, Json(json_value)),
        Err(e) => {
            tracing::error!("Error serializing response: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Failed to serialize response: {}", e)
                })),
            )
        }
    }
}

pub async fn tagline_history(Extension(state): Extension<AppState>) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(history) => (StatusCode::OK, Json(json!({ "history": history }))),
        Err(e) => {
            tracing::error!("Failed to read tagline history: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("Failed to read history: {}", e)
                })),
            )
        }
    }
}
