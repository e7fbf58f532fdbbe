// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transient UI state. Never persisted and never part of undo history.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Coordinate, PinDraft};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Selection {
    /// Pin whose detail panel is open
    pub selected_pin: Option<String>,
    /// Form fields for the next pin
    pub draft: PinDraft,
    /// Last clicked map coordinate, waiting for the draft to be confirmed
    pub pending_coordinate: Option<Coordinate>,
    /// Trip whose path is drawn
    pub active_trip: Option<String>,
}
