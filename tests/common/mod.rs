// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use trip_pins::config::Config;
use trip_pins::db::{keys, Store};
use trip_pins::models::Pin;
use trip_pins::routes::create_router;
use trip_pins::services::Session;
use trip_pins::AppState;

/// Session over an in-memory store with no seed pins.
#[allow(dead_code)]
pub fn empty_session() -> Session {
    let store = Store::in_memory();
    store
        .save(keys::PINS, &Vec::<Pin>::new())
        .expect("in-memory save");
    Session::load(store, 0)
}

/// Create a test app over an in-memory store with no seed pins.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default(), empty_session()));
    (create_router(state.clone()), state)
}

/// Send a request and return the status and parsed JSON body.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
