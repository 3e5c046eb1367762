// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::generate_image::generate_image_handler;
use super::handlers::health_handler;
use crate::config::{CorsConfig, GatewayConfig};
use crate::diffusion::ImageProvider;

/// State shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ImageProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self { provider }
    }
}

pub fn create_app(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/generate-image/", get(generate_image_handler))
        .route("/generate-image", get(generate_image_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors.layer()?)
        .with_state(state);

    Ok(app)
}

pub async fn start_server(config: &GatewayConfig, state: AppState) -> Result<()> {
    let app = create_app(state, &config.cors)?;

    let addr = config.server.listen_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", listener.local_addr()?);
    info!("CORS allowed origins: {:?}", config.cors.allowed_origins);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
