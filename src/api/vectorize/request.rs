// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload extraction

use axum::http::StatusCode;
use axum_extra::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use bytes::Bytes;

use crate::vectorize::VectorizeError;

/// Preferred name of the multipart file field
pub const FILE_FIELD: &str = "file";

/// Raster bytes submitted by the caller
///
/// `content_type` and `file_name` are whatever the client declared; neither
/// is validated.
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl Upload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Format detected from the leading bytes, if any
    pub fn sniffed_format(&self) -> Option<&'static str> {
        image::guess_format(&self.bytes)
            .ok()
            .and_then(|format| format.extensions_str().first().copied())
    }
}

/// Pull the file field out of a multipart body
///
/// The field named `file` wins; failing that, the first field carrying a
/// file name is used. Other fields are skipped.
pub async fn read_upload(multipart: &mut Multipart) -> Result<Upload, VectorizeError> {
    let mut fallback: Option<Upload> = None;

    while let Some(field) = multipart.next_field().await.map_err(from_multipart_error)? {
        let is_file_field = field.name() == Some(FILE_FIELD);
        if !is_file_field && (fallback.is_some() || field.file_name().is_none()) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(from_multipart_error)?;
        let upload = Upload {
            bytes,
            content_type,
            file_name,
        };

        if is_file_field {
            return Ok(upload);
        }
        fallback = Some(upload);
    }

    fallback.ok_or_else(|| {
        VectorizeError::UploadRead(format!("no '{}' file field in request", FILE_FIELD))
    })
}

pub fn from_multipart_error(err: MultipartError) -> VectorizeError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        VectorizeError::UploadTooLarge(err.body_text())
    } else {
        VectorizeError::UploadRead(err.body_text())
    }
}

pub fn from_multipart_rejection(rejection: MultipartRejection) -> VectorizeError {
    VectorizeError::UploadRead(rejection.body_text())
}
