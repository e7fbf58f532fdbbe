// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the map client.
//!
//! Every action answers with an `ActionResponse`. Declined actions (blank
//! trip name, no coordinate, unknown ids) are `200` with `applied: false`.

use crate::error::{AppError, Result};
use crate::models::{Coordinate, Direction, Pin, PinDraft, Selection, Trip};
use crate::services::{MapEvent, MapView, Outcome, SurfaceCommand};
use crate::{AppState, MapShell};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/state", get(get_state))
        .route("/api/view", get(get_view))
        .route("/api/view/geojson", get(get_view_geojson))
        .route("/api/draft", put(set_draft))
        .route("/api/map/click", post(map_click))
        .route("/api/map/markers/{pin_id}/activate", post(activate_marker))
        .route("/api/pins", post(add_pin))
        .route("/api/pins/{id}", delete(delete_pin))
        .route("/api/pins/{id}/focus", post(focus_pin))
        .route("/api/trips", post(create_trip))
        .route("/api/trips/{id}", delete(delete_trip))
        .route("/api/trips/{id}/show", post(show_trip))
        .route("/api/trips/{id}/pins/{pin_id}/toggle", post(toggle_trip_pin))
        .route("/api/trips/{id}/pins/{pin_id}/move", post(move_trip_pin))
        .route("/api/undo", post(undo))
        .route("/api/redo", post(redo))
}

// ─── Responses ───────────────────────────────────────────────

/// Result of an action plus the surface commands to apply.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActionResponse {
    pub applied: bool,
    pub persisted: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub commands: Vec<SurfaceCommand>,
}

/// Snapshot of the whole annotation state.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StateResponse {
    pub pins: Vec<Pin>,
    pub trips: Vec<Trip>,
    pub selection: Selection,
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

/// Redraw if asked, then drain the surface into a response.
fn respond(shell: &mut MapShell, outcome: Outcome, redraw: bool) -> Json<ActionResponse> {
    if redraw {
        shell.redraw();
    }
    let history = shell.session.history();
    Json(ActionResponse {
        applied: outcome.applied,
        persisted: outcome.persisted,
        can_undo: history.can_undo(),
        can_redo: history.can_redo(),
        commands: shell.surface.drain(),
    })
}

/// Outcome of an action that only touches selection state.
fn selection_outcome(changed: bool) -> Outcome {
    Outcome {
        applied: changed,
        persisted: true,
    }
}

// ─── Reads ───────────────────────────────────────────────────

async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let shell = state.shell.lock().await;
    let session = &shell.session;
    Json(StateResponse {
        pins: session.pins().to_vec(),
        trips: session.trips().to_vec(),
        selection: session.selection().clone(),
        can_undo: session.history().can_undo(),
        can_redo: session.history().can_redo(),
        undo_depth: session.history().undo_depth(),
        redo_depth: session.history().redo_depth(),
    })
}

async fn get_view(State(state): State<Arc<AppState>>) -> Json<MapView> {
    Json(state.shell.lock().await.session.view())
}

async fn get_view_geojson(State(state): State<Arc<AppState>>) -> Json<geojson::FeatureCollection> {
    Json(state.shell.lock().await.session.view().to_geojson())
}

// ─── Map Events & Draft ──────────────────────────────────────

async fn set_draft(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<PinDraft>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    shell.session.set_draft(draft);
    respond(&mut shell, selection_outcome(true), false)
}

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub lng: f64,
    pub lat: f64,
}

async fn map_click(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClickRequest>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let changed = shell.session.handle_map_event(MapEvent::Clicked {
        lng: req.lng,
        lat: req.lat,
    });
    respond(&mut shell, selection_outcome(changed), false)
}

async fn activate_marker(
    State(state): State<Arc<AppState>>,
    Path(pin_id): Path<String>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let changed = shell
        .session
        .handle_map_event(MapEvent::MarkerActivated { pin_id });
    respond(&mut shell, selection_outcome(changed), false)
}

// ─── Pins ────────────────────────────────────────────────────

/// Draft fields plus an optional explicit coordinate.
///
/// Without `lng`/`lat` the pending map click is used.
#[derive(Debug, Deserialize)]
pub struct AddPinRequest {
    #[serde(flatten)]
    pub draft: PinDraft,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

async fn add_pin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddPinRequest>,
) -> Result<Json<ActionResponse>> {
    let explicit = match (req.lng, req.lat) {
        (Some(lng), Some(lat)) => Some(Coordinate::new(lng, lat)),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "lng and lat must be given together".to_string(),
            ))
        }
    };

    let mut shell = state.shell.lock().await;
    let coordinate = explicit.or(shell.session.selection().pending_coordinate);
    let outcome = shell.session.add_pin(&req.draft, coordinate)?;
    Ok(respond(&mut shell, outcome, outcome.applied))
}

async fn delete_pin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.delete_pin(&id);
    respond(&mut shell, outcome, outcome.applied)
}

async fn focus_pin(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ActionResponse> {
    let zoom = state.config.focus_zoom;
    let mut shell = state.shell.lock().await;
    let MapShell { session, surface } = &mut *shell;
    let changed = session.focus_pin(&id, zoom, surface);
    respond(&mut shell, selection_outcome(changed), false)
}

// ─── Trips ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
}

async fn create_trip(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTripRequest>,
) -> Result<Json<ActionResponse>> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.create_trip(&req.name)?;
    Ok(respond(&mut shell, outcome, outcome.applied))
}

async fn delete_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.delete_trip(&id);
    respond(&mut shell, outcome, outcome.applied)
}

async fn show_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let changed = shell.session.show_trip(&id);
    respond(&mut shell, selection_outcome(changed), changed)
}

async fn toggle_trip_pin(
    State(state): State<Arc<AppState>>,
    Path((id, pin_id)): Path<(String, String)>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.toggle_pin_in_trip(&id, &pin_id);
    respond(&mut shell, outcome, outcome.applied)
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

async fn move_trip_pin(
    State(state): State<Arc<AppState>>,
    Path((id, pin_id)): Path<(String, String)>,
    Json(req): Json<MoveRequest>,
) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.reorder_trip_pins(&id, &pin_id, req.direction);
    respond(&mut shell, outcome, outcome.applied)
}

// ─── History ─────────────────────────────────────────────────

async fn undo(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.undo();
    respond(&mut shell, outcome, outcome.applied)
}

async fn redo(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    let mut shell = state.shell.lock().await;
    let outcome = shell.session.redo();
    respond(&mut shell, outcome, outcome.applied)
}
