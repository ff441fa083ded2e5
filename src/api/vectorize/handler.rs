// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vectorize endpoint handler

use std::time::Instant;

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::{debug, info, warn};

use super::request::{from_multipart_rejection, read_upload};
use super::response::VectorizeResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vectorize::{vectorize_bytes, VectorDocument, VectorizeError};

/// POST /vectorize - Convert an uploaded raster image to SVG
///
/// Pipeline:
/// 1. Read the file field from the multipart body
/// 2. Stage it in a scoped workspace
/// 3. Run the engine with the fixed conversion profile
/// 4. Read back the SVG and release the workspace
///
/// # Errors
/// - 400 Bad Request: malformed multipart body or no file field
/// - 413 Payload Too Large: upload exceeds the configured limit
/// - 422 Unprocessable Entity: the engine rejected the image
/// - 500 Internal Server Error: workspace staging failed
///
/// All failures carry `{"error": "<message>"}`.
pub async fn vectorize_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VectorizeResponse>, ApiError> {
    let started = Instant::now();

    let document = convert_upload(&state, multipart).await.map_err(|e| {
        warn!(kind = e.kind(), "Error processing image: {}", e);
        ApiError::from(e)
    })?;

    info!(
        "Vectorize complete: {} paths, {} bytes of SVG, {}ms",
        document.path_count(),
        document.len(),
        started.elapsed().as_millis()
    );

    Ok(Json(VectorizeResponse::svg(document)))
}

async fn convert_upload(
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<VectorDocument, VectorizeError> {
    let mut multipart = multipart.map_err(from_multipart_rejection)?;
    let upload = read_upload(&mut multipart).await?;

    debug!(
        "Vectorize upload: {} bytes, file_name={:?}, declared={:?}, sniffed={:?}",
        upload.len(),
        upload.file_name,
        upload.content_type,
        upload.sniffed_format()
    );

    vectorize_bytes(state.engine.clone(), upload.bytes, state.work_dir.clone()).await
}
