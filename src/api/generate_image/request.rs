// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::diffusion::ImageGenerationRequest;

/// Query parameters of GET /generate-image/
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePrompt {
    /// Text prompt describing the desired image. A missing key decodes as empty.
    #[serde(default)]
    pub prompt: String,
}

impl ImagePrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// The prompt must be non-empty. No trimming, no length cap.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.prompt.is_empty() {
            return Err(ApiError::prompt_required());
        }
        Ok(())
    }

    pub fn into_generation_request(self) -> ImageGenerationRequest {
        ImageGenerationRequest::new(self.prompt)
    }
}
