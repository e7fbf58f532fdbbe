// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CORS origin handling over the full router.

use axum::body::Body;
use axum::http::{header, Request};
use tower::ServiceExt;

mod common;

async fn allowed_origin(app: &axum::Router, origin: &str) -> Option<String> {
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_dev_origin_allowed() {
    let (app, _) = common::create_test_app();
    assert_eq!(
        allowed_origin(&app, "http://localhost:5173").await.as_deref(),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn test_localhost_prefixed_domain_rejected() {
    let (app, _) = common::create_test_app();
    assert_eq!(allowed_origin(&app, "http://localhost.evil.example").await, None);
    assert_eq!(allowed_origin(&app, "http://127.0.0.1.evil.example").await, None);
}
