// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Cross-origin behaviour: one allowed origin, credentials on, everything
//! else gets no permissive headers.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use fabstir_vectorize_node::config::ServerConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

use super::support::*;

fn health_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_allowed_origin_gets_cors_headers() {
    let app = app_with(Arc::new(StaticSvgEngine::default()), &ServerConfig::default());

    let response = app.oneshot(health_from(ALLOWED_ORIGIN)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_headers() {
    let app = app_with(Arc::new(StaticSvgEngine::default()), &ServerConfig::default());

    let response = app
        .oneshot(health_from("http://evil.example.com"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_applies_to_vectorize_route() {
    let app = app_with(Arc::new(StaticSvgEngine::default()), &ServerConfig::default());

    let mut request = upload_request(b"bytes");
    request
        .headers_mut()
        .insert(header::ORIGIN, ALLOWED_ORIGIN.parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        ALLOWED_ORIGIN
    );
}

/// Preflight mirrors whatever method and headers the browser asks for
#[tokio::test]
async fn test_preflight_permits_any_method_and_header() {
    let app = app_with(Arc::new(StaticSvgEngine::default()), &ServerConfig::default());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/vectorize")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "PUT"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "x-custom-header"
    );
}

#[tokio::test]
async fn test_configured_origin_replaces_default() {
    let config = ServerConfig {
        cors_origin: "https://app.example.com".to_string(),
        ..Default::default()
    };

    let response = app_with(Arc::new(StaticSvgEngine::default()), &config)
        .oneshot(health_from("https://app.example.com"))
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example.com"
    );

    let response = app_with(Arc::new(StaticSvgEngine::default()), &config)
        .oneshot(health_from(ALLOWED_ORIGIN))
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
