// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI Images client for DALL-E 3 generation

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ProviderError;
use super::provider::ImageProvider;
use crate::config::OpenAIConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Generation parameters. Every request uses these regardless of prompt.
pub const IMAGE_MODEL: &str = "dall-e-3";
pub const IMAGE_SIZE: &str = "1024x1024";
pub const IMAGE_QUALITY: &str = "standard";
pub const IMAGE_COUNT: u32 = 1;

const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Body of POST /images/generations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u32,
}

/// The first image the provider returned
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

// --- OpenAI wire types ---

#[derive(Debug, Deserialize)]
pub struct OpenAIImageResponse {
    #[serde(default)]
    pub data: Vec<OpenAIImageData>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIImageData {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorEnvelope {
    error: OpenAIErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    message: String,
}

// --- Implementations ---

impl ImageGenerationRequest {
    /// Build a request for `prompt` with the fixed model, size, quality and count
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: IMAGE_MODEL.to_string(),
            prompt: prompt.into(),
            size: IMAGE_SIZE.to_string(),
            quality: IMAGE_QUALITY.to_string(),
            n: IMAGE_COUNT,
        }
    }
}

impl OpenAIImageResponse {
    /// Take the first result, failing if there is none or it carries no URL
    pub fn into_first_image(self) -> std::result::Result<GeneratedImage, ProviderError> {
        let first = self
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResult)?;
        let url = first.url.ok_or(ProviderError::MissingUrl)?;

        Ok(GeneratedImage {
            url,
            revised_prompt: first.revised_prompt,
        })
    }
}

/// Pull a human-readable message out of a failed provider response
fn provider_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<OpenAIErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("image provider returned status {}", status.as_u16()))
}

/// Client for the OpenAI Images API
pub struct OpenAIImageClient {
    client: Client,
    endpoint: String,
    api_key: String,
    organization: Option<String>,
}

impl OpenAIImageClient {
    pub fn new(config: &OpenAIConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let endpoint = config.base_url.trim_end_matches('/').to_string();
        debug!(
            "OpenAI image client configured: endpoint={}, organization={}",
            endpoint,
            config.organization.is_some()
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
            organization: config.organization.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate one image and return its URL
    pub async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> std::result::Result<GeneratedImage, ProviderError> {
        let url = format!("{}/images/generations", self.endpoint);
        debug!("Image generation POST {} model={}", url, request.model);

        let mut http_request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request);
        if let Some(ref organization) = self.organization {
            http_request = http_request.header(ORGANIZATION_HEADER, organization);
        }

        let response = http_request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: provider_error_message(status, &text),
            });
        }

        let api_response: OpenAIImageResponse = response.json().await?;
        api_response.into_first_image()
    }
}

#[async_trait]
impl ImageProvider for OpenAIImageClient {
    async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> std::result::Result<GeneratedImage, ProviderError> {
        OpenAIImageClient::generate(self, request).await
    }
}
