// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use fabstir_vectorize_node::{
    cli::{execute, Cli},
    version,
};
use std::env;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before clap reads env fallbacks
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("{}", version::get_version_string());

    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
