// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip-Pins: drop geo-tagged pins on a map and chain them into trips.
//!
//! This crate holds the annotation state (pins, trips, undo/redo history),
//! persists it to a local key-value store, and serves the user actions and
//! the derived map view over a small JSON API. Drawing is left to the
//! browser-side map surface, which applies the `SurfaceCommand`s it gets back.

pub mod config;
pub mod db;
pub mod error;
pub mod id;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{CommandBuffer, Session};
use tokio::sync::Mutex;

/// The composing shell: the session plus the map surface handle it draws to.
pub struct MapShell {
    pub session: Session,
    pub surface: CommandBuffer,
}

impl MapShell {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            surface: CommandBuffer::new(),
        }
    }

    /// Recompute the view and queue it on the surface.
    pub fn redraw(&mut self) {
        self.session.redraw(&mut self.surface);
    }
}

/// Shared application state.
///
/// The shell sits behind one lock; each handler holds it for its whole
/// transaction, so there is a single mutator at a time.
pub struct AppState {
    pub config: Config,
    pub shell: Mutex<MapShell>,
}

impl AppState {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            config,
            shell: Mutex::new(MapShell::new(session)),
        }
    }
}
