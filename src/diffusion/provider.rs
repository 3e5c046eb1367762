// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use async_trait::async_trait;

use super::client::{GeneratedImage, ImageGenerationRequest};
use super::error::ProviderError;

/// Something that turns a generation request into an image.
///
/// The HTTP layer only sees this trait, so handlers can be exercised
/// against an in-memory provider.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<GeneratedImage, ProviderError>;
}
