// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed conversion profile handed to the vectorization engine

use serde::Serialize;

/// Color handling during clustering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Color,
    Binary,
}

/// How shapes of different colors are layered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hierarchy {
    /// Shapes stack on top of each other
    Stacked,
    /// Shapes are cut out of the layers beneath them
    Cutout,
}

/// Curve fitting applied to traced outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    Pixel,
    Polygon,
    Spline,
}

/// Tuning profile controlling quantization and curve fitting
///
/// The service never derives these from a request; every conversion uses
/// [`ConversionParameters::PROFILE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionParameters {
    pub color_mode: ColorMode,
    pub hierarchy: Hierarchy,
    pub curve_mode: CurveMode,
    /// Discard patches smaller than this many pixels (per side)
    pub filter_speckle: usize,
    /// Significant bits per RGB channel (1-8)
    pub color_precision: i32,
    /// Color difference between gradient layers
    pub layer_difference: i32,
    /// Minimum angle in degrees to be considered a corner
    pub corner_threshold: i32,
    /// Minimum segment length before subdivision (3.5-10.0)
    pub length_threshold: f64,
    pub max_iterations: usize,
    /// Minimum angle displacement in degrees to splice a spline
    pub splice_threshold: i32,
    /// Decimal places in emitted path coordinates
    pub path_precision: u32,
}

impl ConversionParameters {
    pub const PROFILE: ConversionParameters = ConversionParameters {
        color_mode: ColorMode::Color,
        hierarchy: Hierarchy::Stacked,
        curve_mode: CurveMode::Spline,
        filter_speckle: 4,
        color_precision: 6,
        layer_difference: 16,
        corner_threshold: 60,
        length_threshold: 4.0,
        max_iterations: 10,
        splice_threshold: 45,
        path_precision: 3,
    };
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self::PROFILE
    }
}
