// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use imagegen_gateway::{
    api::{start_server, AppState},
    cli::{Cli, EnvFileStatus},
    config::GatewayConfig,
    diffusion::OpenAIImageClient,
    version,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Env file first so RUST_LOG from it takes effect
    let env_status = cli.load_env_file();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting {}", version::get_version_string());
    debug!("Build info: {}", version::get_version_info());

    match env_status {
        EnvFileStatus::Loaded(path) => info!("Loaded environment from {}", path.display()),
        EnvFileStatus::NotFound => info!("No .env file found, using process environment"),
        EnvFileStatus::Failed { path, error } => {
            warn!("Could not load {}: {}", path.display(), error)
        }
    }

    let mut config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    cli.apply_overrides(&mut config);
    debug!("Configuration: {:?}", config);

    let client = OpenAIImageClient::new(&config.openai)?;
    info!("Image provider endpoint: {}", client.endpoint());

    let state = AppState::new(Arc::new(client));

    if let Err(e) = start_server(&config, state).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
