// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use super::handlers::health_handler;
use super::vectorize::vectorize_handler;
use crate::config::ServerConfig;
use crate::vectorize::{Vectorizer, VtracerEngine};

/// Shared handler state
///
/// Holds no per-request data: each conversion gets its own workspace.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn Vectorizer>,
    pub work_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(engine: Arc<dyn Vectorizer>, config: &ServerConfig) -> Self {
        Self {
            engine,
            work_dir: config.work_dir.clone(),
        }
    }

    /// State backed by the vtracer engine and system temp dir
    pub fn with_default_engine() -> Self {
        Self {
            engine: Arc::new(VtracerEngine::new()),
            work_dir: None,
        }
    }
}

/// Single-origin CORS: any method and header from that origin, with credentials
///
/// The origin is only echoed back when the request's `Origin` matches it.
/// Methods and headers are mirrored from the preflight because wildcards are
/// not allowed together with credentials.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.cors_origin_header()?]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn create_app(state: AppState, config: &ServerConfig) -> Result<Router> {
    Ok(Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Raster to SVG
        .route("/vectorize", post(vectorize_handler))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn start_server(config: ServerConfig, engine: Arc<dyn Vectorizer>) -> Result<()> {
    config.validate()?;

    let state = AppState::new(engine, &config);
    let app = create_app(state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    info!("Vectorize server listening on {}", config.listen_addr);
    info!(
        "CORS origin: {}, max upload: {} bytes",
        config.cors_origin, config.max_upload_bytes
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Vectorize server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
