// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use trip_pins::error::AppError;

#[test]
fn test_bad_request_status() {
    let response = AppError::BadRequest("nope".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_internal_status() {
    let response = AppError::Internal(anyhow::anyhow!("rng")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
