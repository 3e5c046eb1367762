// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::path::PathBuf;

use crate::config::GatewayConfig;

/// Image generation gateway
#[derive(Parser, Debug, Default)]
#[command(name = "imagegen-gateway")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "HTTP gateway that turns a text prompt into a DALL-E 3 image URL", long_about = None)]
pub struct Cli {
    /// Listen host, overrides HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overrides PORT
    #[arg(long)]
    pub port: Option<u16>,

    /// Environment file loaded before reading configuration (default: ./.env if present)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

/// Outcome of loading the environment file, reported once logging is up
#[derive(Debug)]
pub enum EnvFileStatus {
    Loaded(PathBuf),
    NotFound,
    Failed { path: PathBuf, error: String },
}

impl Cli {
    /// Load variables from the env file. Existing process variables win.
    pub fn load_env_file(&self) -> EnvFileStatus {
        match &self.env_file {
            Some(path) => match dotenv::from_path(path) {
                Ok(()) => EnvFileStatus::Loaded(path.clone()),
                Err(e) => EnvFileStatus::Failed {
                    path: path.clone(),
                    error: e.to_string(),
                },
            },
            None => match dotenv::dotenv() {
                Ok(path) => EnvFileStatus::Loaded(path),
                Err(_) => EnvFileStatus::NotFound,
            },
        }
    }

    pub fn apply_overrides(&self, config: &mut GatewayConfig) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
