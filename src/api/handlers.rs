// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::vectorize::ConversionParameters;
use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub engine: String,
    /// Fixed profile every conversion uses
    pub profile: serde_json::Value,
    pub features: Vec<String>,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        engine: state.engine.name().to_string(),
        profile: serde_json::to_value(ConversionParameters::PROFILE).unwrap_or_default(),
        features: version::FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}
