// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{debug, info, warn};

use super::request::ImagePrompt;
use super::response::ImageResult;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// GET /generate-image/?prompt=... - Generate an image from a text prompt
///
/// Pipeline:
/// 1. Decode the query string (400 on malformed input)
/// 2. Reject an empty prompt with 400 before touching the provider
/// 3. Call the provider once with the fixed DALL-E 3 parameters
/// 4. Return the first image URL, or map the provider failure to a status
pub async fn generate_image_handler(
    State(state): State<AppState>,
    query: Result<Query<ImagePrompt>, QueryRejection>,
) -> Result<Json<ImageResult>, ApiError> {
    let Query(params) = query.map_err(|e| {
        warn!("Image generation query rejected: {}", e);
        ApiError::InvalidRequest(e.body_text())
    })?;

    debug!(
        "Image generation request received: prompt_len={}",
        params.prompt.len()
    );

    if let Err(e) = params.validate() {
        warn!("Image generation validation failed: {}", e);
        return Err(e);
    }

    let request = params.into_generation_request();

    let image = state.provider.generate(&request).await.map_err(|e| {
        warn!("Image provider call failed: {}", e);
        ApiError::from(e)
    })?;

    info!(
        "Image generated: model={}, size={}, quality={}",
        request.model, request.size, request.quality
    );

    Ok(Json(ImageResult::from(image)))
}
