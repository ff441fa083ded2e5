// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scoped per-conversion storage and the stage → convert → read pipeline

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tempfile::TempDir;
use tracing::{debug, warn};

use super::document::VectorDocument;
use super::engine::Vectorizer;
use super::errors::VectorizeError;
use super::params::ConversionParameters;

pub const INPUT_FILE_NAME: &str = "input.png";
pub const OUTPUT_FILE_NAME: &str = "output.svg";

const WORKSPACE_PREFIX: &str = "vectorize-";

/// Temporary directory owned by exactly one conversion
///
/// The directory and everything in it is removed when the workspace is
/// dropped, whichever way the conversion ends.
#[derive(Debug)]
pub struct ScopedWorkspace {
    dir: TempDir,
}

impl ScopedWorkspace {
    /// Create a workspace under `root`, or under the system temp dir if `None`
    pub fn create(root: Option<&Path>) -> Result<Self, VectorizeError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);

        let dir = match root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| VectorizeError::staging("creating workspace", e))?;

        debug!("Created workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join(INPUT_FILE_NAME)
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join(OUTPUT_FILE_NAME)
    }

    pub fn stage_input(&self, bytes: &[u8]) -> Result<PathBuf, VectorizeError> {
        let path = self.input_path();
        fs::write(&path, bytes).map_err(|e| VectorizeError::staging("writing input", e))?;
        Ok(path)
    }

    /// Read back what the engine wrote
    ///
    /// A missing or blank output file counts as an engine failure, since the
    /// engine claimed success without producing a document.
    pub fn read_output(&self) -> Result<VectorDocument, VectorizeError> {
        match fs::read_to_string(self.output_path()) {
            Ok(svg) if svg.trim().is_empty() => Err(VectorizeError::Engine(
                "engine produced an empty document".to_string(),
            )),
            Ok(svg) => Ok(VectorDocument::new(svg)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(VectorizeError::Engine(
                "engine produced no output".to_string(),
            )),
            Err(e) => Err(VectorizeError::staging("reading output", e)),
        }
    }

    /// Remove the directory now, reporting (but not failing on) cleanup errors
    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!("Failed to remove workspace {}: {}", path.display(), e);
        }
    }
}

/// Run one conversion synchronously inside a fresh workspace
pub fn run_pipeline(
    engine: &dyn Vectorizer,
    bytes: &[u8],
    params: &ConversionParameters,
    root: Option<&Path>,
) -> Result<VectorDocument, VectorizeError> {
    let workspace = ScopedWorkspace::create(root)?;
    let input = workspace.stage_input(bytes)?;
    engine.convert(&input, &workspace.output_path(), params)?;
    let document = workspace.read_output()?;
    workspace.release();
    Ok(document)
}

/// Run [`run_pipeline`] on the blocking pool with the fixed profile
///
/// There is no cancellation: once started, the conversion runs to the end
/// even if the caller goes away.
pub async fn vectorize_bytes(
    engine: Arc<dyn Vectorizer>,
    bytes: Bytes,
    root: Option<PathBuf>,
) -> Result<VectorDocument, VectorizeError> {
    tokio::task::spawn_blocking(move || {
        run_pipeline(
            engine.as_ref(),
            &bytes,
            &ConversionParameters::PROFILE,
            root.as_deref(),
        )
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            VectorizeError::Engine("conversion panicked".to_string())
        } else {
            VectorizeError::Engine(format!("conversion task failed: {}", e))
        }
    })?
}
