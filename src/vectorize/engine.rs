// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vectorization engine boundary
//!
//! The engine is an opaque collaborator: it reads a raster file, writes an SVG
//! file, and reports failure as a message. Everything the service knows about
//! it goes through [`Vectorizer`], so tests can swap in a mock.

use std::path::Path;

use tracing::debug;
use visioncortex::PathSimplifyMode;

use super::errors::VectorizeError;
use super::params::{ColorMode, ConversionParameters, CurveMode, Hierarchy};

/// A raster-to-vector converter driven through files
///
/// Implementations block the calling thread; callers run them on the blocking
/// pool.
#[cfg_attr(test, mockall::automock)]
pub trait Vectorizer: Send + Sync {
    /// Engine name reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Convert the raster at `input` into an SVG written to `output`
    fn convert(
        &self,
        input: &Path,
        output: &Path,
        params: &ConversionParameters,
    ) -> Result<(), VectorizeError>;
}

/// [`Vectorizer`] backed by the `vtracer` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct VtracerEngine;

impl VtracerEngine {
    pub fn new() -> Self {
        Self
    }

    fn config(params: &ConversionParameters) -> vtracer::Config {
        vtracer::Config {
            color_mode: match params.color_mode {
                ColorMode::Color => vtracer::ColorMode::Color,
                ColorMode::Binary => vtracer::ColorMode::Binary,
            },
            hierarchical: match params.hierarchy {
                Hierarchy::Stacked => vtracer::Hierarchical::Stacked,
                Hierarchy::Cutout => vtracer::Hierarchical::Cutout,
            },
            filter_speckle: params.filter_speckle,
            color_precision: params.color_precision,
            layer_difference: params.layer_difference,
            mode: match params.curve_mode {
                CurveMode::Pixel => PathSimplifyMode::None,
                CurveMode::Polygon => PathSimplifyMode::Polygon,
                CurveMode::Spline => PathSimplifyMode::Spline,
            },
            corner_threshold: params.corner_threshold,
            length_threshold: params.length_threshold,
            max_iterations: params.max_iterations,
            splice_threshold: params.splice_threshold,
            path_precision: Some(params.path_precision),
        }
    }
}

impl Vectorizer for VtracerEngine {
    fn name(&self) -> &'static str {
        "vtracer"
    }

    fn convert(
        &self,
        input: &Path,
        output: &Path,
        params: &ConversionParameters,
    ) -> Result<(), VectorizeError> {
        debug!(
            "vtracer converting {} -> {}",
            input.display(),
            output.display()
        );
        vtracer::convert_image_to_svg(input, output, Self::config(params))
            .map_err(VectorizeError::Engine)
    }
}
