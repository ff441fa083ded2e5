// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod vectorize;
pub mod version;

pub use api::{create_app, start_server, AppState, VectorizeResponse};
pub use config::ServerConfig;
pub use vectorize::{ConversionParameters, VectorDocument, VectorizeError, Vectorizer, VtracerEngine};
