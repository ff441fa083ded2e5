// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use super::vectorize::VectorizeResponse;
use crate::vectorize::VectorizeError;

/// Errors surfaced at the HTTP boundary
///
/// Every variant renders as `{"error": "<message>"}` with a real error
/// status; nothing else is added to the body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    InvalidRequest(String),
    PayloadTooLarge(String),
    UnprocessableImage(String),
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) => 400,
            ApiError::PayloadTooLarge(_) => 413,
            ApiError::UnprocessableImage(_) => 422,
            ApiError::InternalError(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidRequest(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::UnprocessableImage(msg)
            | ApiError::InternalError(msg) => msg,
        }
    }

    pub fn to_response(&self) -> VectorizeResponse {
        VectorizeResponse::error(self.message())
    }
}

impl From<VectorizeError> for ApiError {
    fn from(err: VectorizeError) -> Self {
        let message = err.to_string();
        match err {
            VectorizeError::UploadRead(_) => ApiError::InvalidRequest(message),
            VectorizeError::UploadTooLarge(_) => ApiError::PayloadTooLarge(message),
            VectorizeError::Engine(_) => ApiError::UnprocessableImage(message),
            VectorizeError::Staging { .. } => ApiError::InternalError(message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            ApiError::UnprocessableImage(msg) => write!(f, "Unprocessable image: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
