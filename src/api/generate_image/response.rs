// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response types

use serde::{Deserialize, Serialize};

use crate::diffusion::GeneratedImage;

/// Success body of GET /generate-image/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    pub image_url: String,
}

impl From<GeneratedImage> for ImageResult {
    fn from(image: GeneratedImage) -> Self {
        Self {
            image_url: image.url,
        }
    }
}
