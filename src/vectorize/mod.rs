// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Raster-to-vector conversion
//!
//! This module provides:
//! - The fixed conversion profile ([`ConversionParameters`])
//! - The engine boundary ([`Vectorizer`]) and its vtracer implementation
//! - Scoped temporary storage for one conversion ([`ScopedWorkspace`])
//!
//! Conversions are CPU-bound and blocking; async callers go through
//! [`vectorize_bytes`], which runs them on the blocking pool.

pub mod document;
pub mod engine;
pub mod errors;
pub mod params;
pub mod workspace;

pub use document::VectorDocument;
pub use engine::{Vectorizer, VtracerEngine};
pub use errors::VectorizeError;
pub use params::{ColorMode, ConversionParameters, CurveMode, Hierarchy};
pub use workspace::{run_pipeline, vectorize_bytes, ScopedWorkspace};
