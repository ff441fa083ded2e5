// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::vectorize::{vectorize_bytes, Vectorizer, VtracerEngine};

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Raster image to convert
    pub input: PathBuf,

    /// Where to write the SVG
    pub output: PathBuf,

    /// Directory to stage the conversion in (system temp dir if unset)
    #[arg(long, env = "VECTORIZE_WORK_DIR")]
    pub work_dir: Option<PathBuf>,
}

/// Convert a local file with the same profile and staging as the HTTP endpoint
pub async fn convert_file(args: ConvertArgs) -> Result<()> {
    convert_with_engine(args, Arc::new(VtracerEngine::new())).await
}

pub async fn convert_with_engine(args: ConvertArgs, engine: Arc<dyn Vectorizer>) -> Result<()> {
    let bytes = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    match image::guess_format(&bytes) {
        Ok(format) => info!("Converting {} ({:?})", args.input.display(), format),
        Err(_) => warn!(
            "Converting {} (format not recognised, passing to engine anyway)",
            args.input.display()
        ),
    }

    let document = vectorize_bytes(engine, Bytes::from(bytes), args.work_dir).await?;

    tokio::fs::write(&args.output, document.as_str())
        .await
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        "Wrote {} ({} paths, {} bytes)",
        args.output.display(),
        document.path_count(),
        document.len()
    );
    Ok(())
}
