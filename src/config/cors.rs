// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Browser cross-origin policy

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::gateway::ConfigError;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub const ALLOWED_METHODS: [Method; 2] = [Method::GET, Method::POST];

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl CorsConfig {
    /// Parse a comma-separated origin list such as `CORS_ALLOWED_ORIGINS`
    pub fn from_list(raw: &str) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() {
            return Err(ConfigError::Invalid {
                key: "CORS_ALLOWED_ORIGINS",
                value: raw.to_string(),
            });
        }

        let config = Self { allowed_origins };
        config.origin_values()?;
        Ok(config)
    }

    fn origin_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                let invalid = || ConfigError::Invalid {
                    key: "CORS_ALLOWED_ORIGINS",
                    value: origin.clone(),
                };
                // A wildcard cannot be combined with credentials.
                if origin == "*" {
                    return Err(invalid());
                }
                HeaderValue::from_str(origin).map_err(|_| invalid())
            })
            .collect()
    }

    /// Build the layer: listed origins only, GET/POST, two request headers, credentials allowed
    pub fn layer(&self) -> Result<CorsLayer, ConfigError> {
        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origin_values()?))
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([X_REQUESTED_WITH, header::CONTENT_TYPE])
            .allow_credentials(true))
    }
}
