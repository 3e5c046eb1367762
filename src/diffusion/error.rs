// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for calls to the image generation provider

use thiserror::Error;

/// Everything a provider call can fail with
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider answered with a non-success HTTP status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request never produced a response (connect, DNS, TLS, reset)
    #[error("Image provider unreachable: {0}")]
    Unreachable(String),

    /// Configured provider timeout elapsed
    #[error("Image provider timed out")]
    Timeout,

    /// Success status but the body was not the expected JSON
    #[error("Invalid response from image provider: {0}")]
    InvalidResponse(String),

    #[error("Image provider returned no images")]
    EmptyResult,

    #[error("Image provider returned no image URL")]
    MissingUrl,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else {
            ProviderError::Unreachable(e.to_string())
        }
    }
}
