// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation via the OpenAI Images API

pub mod client;
pub mod error;
pub mod provider;

pub use client::{GeneratedImage, ImageGenerationRequest, OpenAIImageClient};
pub use error::ProviderError;
pub use provider::ImageProvider;
