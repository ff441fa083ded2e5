// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration
//!
//! Every option can be set as a CLI flag or an environment variable.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Maximum upload size (10MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "VECTORIZE_LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// The single origin allowed to make cross-origin requests
    #[arg(long, env = "VECTORIZE_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Largest accepted request body in bytes
    #[arg(long, env = "VECTORIZE_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Directory to create per-request workspaces in (system temp dir if unset)
    #[arg(long, env = "VECTORIZE_WORK_DIR")]
    pub work_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            work_dir: None,
        }
    }
}

impl ServerConfig {
    /// The allowed origin as a header value
    pub fn cors_origin_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(self.cors_origin.trim())
            .with_context(|| format!("Invalid CORS origin '{}'", self.cors_origin))
    }

    pub fn validate(&self) -> Result<()> {
        self.cors_origin_header()?;
        if self.max_upload_bytes == 0 {
            anyhow::bail!("max_upload_bytes must be greater than 0");
        }
        if let Some(dir) = &self.work_dir {
            if !dir.is_dir() {
                anyhow::bail!("work_dir {} is not a directory", dir.display());
            }
        }
        Ok(())
    }
}
