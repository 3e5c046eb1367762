// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAIImageClient against a local fake provider

use axum::http::StatusCode;
use imagegen_gateway::config::OpenAIConfig;
use imagegen_gateway::diffusion::client::{
    ImageGenerationRequest, OpenAIImageClient, OpenAIImageResponse, DEFAULT_BASE_URL,
};
use imagegen_gateway::diffusion::ProviderError;
use std::time::Duration;

use super::upstream::{closed_base_url, error_body, success_body, UpstreamBuilder};

const IMAGE_URL: &str = "https://oaidalleapiprodscus.blob.core.windows.net/private/img-abc.png?st=1&sig=x";

fn client_for(base_url: &str) -> OpenAIImageClient {
    OpenAIImageClient::new(&OpenAIConfig::new("sk-test").with_base_url(base_url)).unwrap()
}

// ===== Construction =====

#[test]
fn test_default_endpoint() {
    let client = OpenAIImageClient::new(&OpenAIConfig::new("sk-test")).unwrap();
    assert_eq!(client.endpoint(), DEFAULT_BASE_URL);
}

#[test]
fn test_trailing_slash_trimmed() {
    let client = client_for("http://localhost:8082/v1/");
    assert_eq!(client.endpoint(), "http://localhost:8082/v1");
}

// ===== Request shape =====

#[test]
fn test_request_has_fixed_parameters() {
    let request = ImageGenerationRequest::new("A cat in space");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "model": "dall-e-3",
            "prompt": "A cat in space",
            "size": "1024x1024",
            "quality": "standard",
            "n": 1
        })
    );
}

// ===== Response parsing =====

#[test]
fn test_first_image_taken_from_multiple() {
    let response: OpenAIImageResponse = serde_json::from_value(serde_json::json!({
        "data": [{"url": "https://a.test/1.png"}, {"url": "https://a.test/2.png"}]
    }))
    .unwrap();
    let image = response.into_first_image().unwrap();
    assert_eq!(image.url, "https://a.test/1.png");
    assert!(image.revised_prompt.is_none());
}

#[test]
fn test_missing_data_field_is_empty_result() {
    let response: OpenAIImageResponse =
        serde_json::from_value(serde_json::json!({"created": 1})).unwrap();
    assert!(matches!(
        response.into_first_image(),
        Err(ProviderError::EmptyResult)
    ));
}

// ===== Live calls =====

#[tokio::test]
async fn test_generate_success() {
    let upstream = UpstreamBuilder::json(StatusCode::OK, success_body(IMAGE_URL))
        .spawn()
        .await;
    let client = client_for(&upstream.base_url);

    let image = client
        .generate(&ImageGenerationRequest::new("a lighthouse"))
        .await
        .unwrap();

    assert_eq!(image.url, IMAGE_URL);
    assert_eq!(
        image.revised_prompt.as_deref(),
        Some("A detailed painting of a lighthouse at dusk")
    );

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    let (headers, body) = &requests[0];
    assert_eq!(headers.get("authorization").unwrap(), "Bearer sk-test");
    assert!(headers.get("openai-organization").is_none());
    assert_eq!(body["model"], "dall-e-3");
    assert_eq!(body["prompt"], "a lighthouse");
    assert_eq!(body["size"], "1024x1024");
    assert_eq!(body["quality"], "standard");
    assert_eq!(body["n"], 1);
}

#[tokio::test]
async fn test_organization_header_sent_when_configured() {
    let upstream = UpstreamBuilder::json(StatusCode::OK, success_body(IMAGE_URL))
        .spawn()
        .await;
    let config = OpenAIConfig::new("sk-test")
        .with_base_url(&upstream.base_url)
        .with_organization("org-42");
    let client = OpenAIImageClient::new(&config).unwrap();

    client
        .generate(&ImageGenerationRequest::new("a lighthouse"))
        .await
        .unwrap();

    let requests = upstream.requests();
    assert_eq!(requests[0].0.get("openai-organization").unwrap(), "org-42");
}

#[tokio::test]
async fn test_rate_limit_error_is_parsed() {
    let upstream = UpstreamBuilder::json(
        StatusCode::TOO_MANY_REQUESTS,
        error_body("rate limited", "requests", Some("rate_limit_exceeded")),
    )
    .spawn()
    .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("storm"))
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "rate limited");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_content_policy_rejection_is_parsed() {
    let upstream = UpstreamBuilder::json(
        StatusCode::BAD_REQUEST,
        error_body(
            "Your request was rejected as a result of our safety system.",
            "invalid_request_error",
            Some("content_policy_violation"),
        ),
    )
    .spawn()
    .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("something"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Api { status: 400, .. }));
    assert_eq!(
        err.to_string(),
        "Your request was rejected as a result of our safety system."
    );
}

#[tokio::test]
async fn test_plain_text_error_body_is_used_verbatim() {
    let upstream = UpstreamBuilder::text(StatusCode::BAD_GATEWAY, "upstream connect error")
        .spawn()
        .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream connect error");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_error_body_uses_reason_phrase() {
    let upstream = UpstreamBuilder::text(StatusCode::SERVICE_UNAVAILABLE, "")
        .spawn()
        .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Service Unavailable");
}

#[tokio::test]
async fn test_empty_data_is_empty_result() {
    let upstream = UpstreamBuilder::json(
        StatusCode::OK,
        serde_json::json!({"created": 1, "data": []}),
    )
    .spawn()
    .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::EmptyResult));
}

#[tokio::test]
async fn test_b64_only_result_is_missing_url() {
    let upstream = UpstreamBuilder::json(
        StatusCode::OK,
        serde_json::json!({"created": 1, "data": [{"b64_json": "iVBORw0KGgo="}]}),
    )
    .spawn()
    .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::MissingUrl));
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_response() {
    let upstream = UpstreamBuilder::text(StatusCode::OK, "<html>maintenance</html>")
        .spawn()
        .await;
    let client = client_for(&upstream.base_url);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_closed_port_is_unreachable() {
    let client = client_for(&closed_base_url().await);

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Unreachable(_)));
}

#[tokio::test]
async fn test_configured_timeout_is_enforced() {
    let upstream = UpstreamBuilder::json(StatusCode::OK, success_body(IMAGE_URL))
        .with_delay(Duration::from_secs(2))
        .spawn()
        .await;
    let config = OpenAIConfig::new("sk-test")
        .with_base_url(&upstream.base_url)
        .with_timeout(Duration::from_millis(200));
    let client = OpenAIImageClient::new(&config).unwrap();

    let err = client
        .generate(&ImageGenerationRequest::new("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout));
}
