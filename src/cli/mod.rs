// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod convert;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::api::start_server;
use crate::config::ServerConfig;
use crate::vectorize::VtracerEngine;

/// Fabstir Vectorize Node
#[derive(Parser, Debug)]
#[command(name = "vectorize-server")]
#[command(version)]
#[command(about = "Raster to SVG conversion over HTTP", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Server settings used when no subcommand is given
    #[command(flatten)]
    pub serve: ServerConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve(ServerConfig),

    /// Convert a local raster file to SVG
    Convert(convert::ConvertArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Serve(config)) => serve(config).await,
        Some(Commands::Convert(args)) => convert::convert_file(args).await,
        None => serve(cli.serve).await,
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    start_server(config, Arc::new(VtracerEngine::new())).await
}
