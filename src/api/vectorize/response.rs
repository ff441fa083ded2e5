// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vectorize response envelope

use serde::{Deserialize, Serialize};

use crate::vectorize::VectorDocument;

/// Response body for POST /vectorize
///
/// Exactly one of `svg` or `error` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VectorizeResponse {
    Svg { svg: String },
    Error { error: String },
}

impl VectorizeResponse {
    pub fn svg(document: VectorDocument) -> Self {
        VectorizeResponse::Svg {
            svg: document.into_inner(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        VectorizeResponse::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, VectorizeResponse::Error { .. })
    }
}
