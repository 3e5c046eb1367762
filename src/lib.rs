// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod diffusion;
pub mod version;

pub use api::{create_app, AppState};
pub use config::{CorsConfig, GatewayConfig, OpenAIConfig};
pub use diffusion::{ImageProvider, OpenAIImageClient, ProviderError};
