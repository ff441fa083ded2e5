// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::Serialize;

/// SVG markup produced by the engine for one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VectorDocument(String);

impl VectorDocument {
    pub fn new(svg: impl Into<String>) -> Self {
        Self(svg.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `<path` elements, used for request logging
    pub fn path_count(&self) -> usize {
        self.0.matches("<path").count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
