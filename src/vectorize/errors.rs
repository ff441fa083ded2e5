// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error taxonomy for the vectorization pipeline

use std::io;
use thiserror::Error;

/// Failures that can end a single conversion
///
/// None of these are fatal to the server: each one is scoped to the request
/// (or CLI invocation) that produced it.
#[derive(Debug, Error)]
pub enum VectorizeError {
    /// The submitted bytes could not be read from the request
    #[error("Failed to read upload: {0}")]
    UploadRead(String),

    /// The upload exceeded the configured body limit
    #[error("Upload exceeds maximum size: {0}")]
    UploadTooLarge(String),

    /// The scoped workspace could not be created, written or read back
    #[error("Staging failed while {action}: {source}")]
    Staging {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// The engine reported an error, panicked, or wrote nothing
    #[error("Conversion failed: {0}")]
    Engine(String),
}

impl VectorizeError {
    pub fn staging(action: &'static str, source: io::Error) -> Self {
        VectorizeError::Staging { action, source }
    }

    /// Short machine-friendly kind, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            VectorizeError::UploadRead(_) => "upload_read",
            VectorizeError::UploadTooLarge(_) => "upload_too_large",
            VectorizeError::Staging { .. } => "staging",
            VectorizeError::Engine(_) => "engine",
        }
    }
}
