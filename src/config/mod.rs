// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cors;
pub mod gateway;

pub use cors::CorsConfig;
pub use gateway::{ConfigError, GatewayConfig, OpenAIConfig, ServerConfig};
