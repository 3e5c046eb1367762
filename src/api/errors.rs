// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diffusion::ProviderError;

pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// Error body returned on every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InvalidRequest(String),
    /// Provider rejected the call; its status is passed through
    Upstream {
        status: u16,
        message: String,
    },
    BadGateway(String),
    GatewayTimeout(String),
}

impl ApiError {
    pub fn prompt_required() -> Self {
        ApiError::InvalidRequest(PROMPT_REQUIRED.to_string())
    }

    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Upstream { message, .. } => message.clone(),
            ApiError::BadGateway(msg) => msg.clone(),
            ApiError::GatewayTimeout(msg) => msg.clone(),
        };
        ErrorResponse { detail }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            // Only error statuses pass through; anything else is not a failure
            // a browser client could act on.
            ApiError::Upstream { status, .. } if (400..=599).contains(status) => *status,
            ApiError::Upstream { .. } | ApiError::BadGateway(_) => 502,
            ApiError::GatewayTimeout(_) => 504,
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Api { status, message } => ApiError::Upstream { status, message },
            ProviderError::Timeout => ApiError::GatewayTimeout(e.to_string()),
            ProviderError::Unreachable(_)
            | ProviderError::InvalidResponse(_)
            | ProviderError::EmptyResult
            | ProviderError::MissingUrl => ApiError::BadGateway(e.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Upstream { status, message } => {
                write!(f, "Provider error ({}): {}", status, message)
            }
            ApiError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            ApiError::GatewayTimeout(msg) => write!(f, "Gateway timeout: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
