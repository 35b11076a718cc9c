use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use tagline_llm::hf_api::HuggingFaceService;
use tagline_llm::{ClientConfig, GenerationClient};

fn client_for(server: &MockServer, models: &[&str]) -> GenerationClient {
    let service =
        HuggingFaceService::new("test-key".to_string()).with_base_url(server.url("/models"));

    GenerationClient::from_service(
        Box::new(service),
        ClientConfig {
            models: models.iter().map(|m| m.to_string()).collect(),
            timeout: Duration::from_secs(5),
        },
    )
}

#[tokio::test]
async fn returns_parsed_taglines_from_first_working_model() {
    let server = MockServer::start();

    let working = server.mock(|when, then| {
        when.method(POST)
            .path("/models/alpha")
            .header("authorization", "Bearer test-key");
        then.status(200)
            .json_body(json!([{ "generated_text": "- Be Bold\n• Dream Big\n- Go Far\n" }]));
    });

    let client = client_for(&server, &["alpha"]);
    let taglines = client.generate_taglines("prompt", 2).await.unwrap();

    assert_eq!(taglines, vec!["Be Bold", "Dream Big"]);
    working.assert();
}

#[tokio::test]
async fn falls_back_on_error_status() {
    let server = MockServer::start();

    let failing = server.mock(|when, then| {
        when.method(POST).path("/models/alpha");
        then.status(503).body("model loading");
    });
    let working = server.mock(|when, then| {
        when.method(POST).path("/models/beta");
        then.status(200)
            .json_body(json!([{ "generated_text": "Fallback Wins\n" }]));
    });

    let client = client_for(&server, &["alpha", "beta"]);
    let taglines = client.generate_taglines("prompt", 3).await.unwrap();

    assert_eq!(taglines, vec!["Fallback Wins"]);
    failing.assert();
    working.assert();
}

#[tokio::test]
async fn falls_back_on_unparseable_body() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/models/alpha");
        then.status(200).json_body(json!({ "unexpected": "shape" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/models/beta");
        then.status(200)
            .json_body(json!({ "generated_text": "Single Object Shape\n" }));
    });

    let client = client_for(&server, &["alpha", "beta"]);
    let taglines = client.generate_taglines("prompt", 3).await.unwrap();

    assert_eq!(taglines, vec!["Single Object Shape"]);
}

#[tokio::test]
async fn later_models_are_never_invoked_after_a_success() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/models/alpha");
        then.status(200)
            .json_body(json!([{ "generated_text": "Winner\n" }]));
    });
    let untouched = server.mock(|when, then| {
        when.method(POST).path("/models/beta");
        then.status(200)
            .json_body(json!([{ "generated_text": "Never Seen\n" }]));
    });

    let client = client_for(&server, &["alpha", "beta"]);
    let taglines = client.generate_taglines("prompt", 3).await.unwrap();

    assert_eq!(taglines, vec!["Winner"]);
    assert_eq!(untouched.hits(), 0);
}

#[tokio::test]
async fn exhausting_every_model_is_an_error() {
    let server = MockServer::start();

    let alpha = server.mock(|when, then| {
        when.method(POST).path("/models/alpha");
        then.status(500);
    });
    let beta = server.mock(|when, then| {
        when.method(POST).path("/models/beta");
        then.status(404);
    });

    let client = client_for(&server, &["alpha", "beta"]);
    let result = client.generate_taglines("prompt", 3).await;

    assert!(result.is_err());
    assert_eq!(alpha.hits(), 1);
    assert_eq!(beta.hits(), 1);
}

#[tokio::test]
async fn empty_model_output_counts_as_a_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/models/alpha");
        then.status(200)
            .json_body(json!([{ "generated_text": "Taglines:\n\n" }]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/models/beta");
        then.status(200)
            .json_body(json!([{ "generated_text": "Real Content\n" }]));
    });

    let client = client_for(&server, &["alpha", "beta"]);
    let taglines = client.generate_taglines("prompt", 3).await.unwrap();

    assert_eq!(taglines, vec!["Real Content"]);
}
