// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Fabstir Vectorize Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-vtracer-vectorize-2025-10-15";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2025-10-15";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "raster-to-svg",
    "multipart-upload",
    "scoped-workspaces",
    "single-origin-cors",
    "upload-size-limit",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Vectorize Node {} ({})", VERSION, BUILD_DATE)
}
