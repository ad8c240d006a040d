// ABOUTME: Server binary for the AI Diet Planner HTTP API
// ABOUTME: Loads configuration, initializes logging and serves the planner routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AI Diet Planner Server Binary
//!
//! Starts the HTTP API on `HTTP_HOST:HTTP_PORT` (default `0.0.0.0:8000`).

use ai_diet_planner::{
    config::ServerConfig, logging, resources::ServerResources, routes,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "ai-diet-planner")]
#[command(about = "AI Diet Planner - pantry filtering, diet matching and recipe planning")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }
    if let Some(host) = args.host {
        config.http.host = host;
    }

    info!("{}", config.summary());

    let address = config.bind_address();
    let resources = Arc::new(ServerResources::from_config(config)?);
    let app = routes::app(resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
