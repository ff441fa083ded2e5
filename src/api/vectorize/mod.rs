// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vectorize API endpoint module
//!
//! Provides POST /vectorize for converting raster uploads to SVG.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::vectorize_handler;
pub use request::{read_upload, Upload, FILE_FIELD};
pub use response::VectorizeResponse;
