// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_image;
pub mod handlers;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use generate_image::{generate_image_handler, ImagePrompt, ImageResult};
pub use handlers::HealthResponse;
pub use http_server::{create_app, start_server, AppState};
