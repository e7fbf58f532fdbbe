// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Annotation session: the application-state object behind every action.
//!
//! Each mutating action is one synchronous transaction:
//! 1. Validate input (declined actions touch nothing)
//! 2. Apply the edit to a copy of the current snapshot
//! 3. Record the previous snapshot in history, install the copy
//! 4. Persist pins, trips, and both history stacks

use ring::rand::SystemRandom;

use crate::db::{keys, Store};
use crate::error::Result;
use crate::id::new_id;
use crate::models::{
    seed_pins, Coordinate, Direction, Pin, PinDraft, Selection, Snapshot, Trip,
};
use crate::services::history::History;
use crate::services::projection::{project, MapView};
use crate::services::surface::{self, MapEvent, MapSurface};
use crate::time_utils::today_utc;

/// Result of a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The document changed
    pub applied: bool,
    /// Every record was written (always `true` when nothing changed)
    pub persisted: bool,
}

impl Outcome {
    fn declined() -> Self {
        Self {
            applied: false,
            persisted: true,
        }
    }
}

/// In-memory document, history, and selection bound to a store.
pub struct Session {
    store: Store,
    rng: SystemRandom,
    doc: Snapshot,
    history: History,
    selection: Selection,
}

impl Session {
    /// Load a session from the store.
    ///
    /// Missing or unreadable records fall back to defaults: seed pins, no
    /// trips, empty history.
    pub fn load(store: Store, history_limit: usize) -> Self {
        let pins = store.load_or(keys::PINS, seed_pins());
        let trips = store.load_or(keys::TRIPS, Vec::<Trip>::new());
        let past = store.load_or(keys::UNDO_STACK, Vec::<Snapshot>::new());
        let future = store.load_or(keys::REDO_STACK, Vec::<Snapshot>::new());
        let history = History::restore(past, future, history_limit);

        tracing::info!(
            pins = pins.len(),
            trips = trips.len(),
            undo_depth = history.undo_depth(),
            redo_depth = history.redo_depth(),
            "Session loaded"
        );

        Self {
            store,
            rng: SystemRandom::new(),
            doc: Snapshot::new(pins, trips),
            history,
            selection: Selection::default(),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn snapshot(&self) -> &Snapshot {
        &self.doc
    }

    pub fn pins(&self) -> &[Pin] {
        &self.doc.pins
    }

    pub fn trips(&self) -> &[Trip] {
        &self.doc.trips
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current map view.
    pub fn view(&self) -> MapView {
        project(&self.doc, &self.selection)
    }

    /// Push the current view onto a surface.
    pub fn redraw(&self, surface: &mut dyn MapSurface) {
        surface::redraw(&self.view(), surface);
    }

    // ─── Transactions ────────────────────────────────────────────

    fn commit(&mut self, action: &'static str, edit: impl FnOnce(&mut Snapshot) -> bool) -> Outcome {
        let mut next = self.doc.clone();
        if !edit(&mut next) || next == self.doc {
            tracing::debug!(action, "Action declined");
            return Outcome::declined();
        }

        let previous = std::mem::replace(&mut self.doc, next);
        self.history.record(previous);
        let persisted = self.persist();

        tracing::info!(
            action,
            undo_depth = self.history.undo_depth(),
            persisted,
            "Action applied"
        );
        Outcome {
            applied: true,
            persisted,
        }
    }

    /// Write all four records, trips before pins, stopping at the first
    /// failure. A cascading delete interrupted between the two leaves
    /// trips that reference only surviving pins. The in-memory state stays
    /// authoritative.
    fn persist(&self) -> bool {
        let result = self
            .store
            .save(keys::TRIPS, &self.doc.trips)
            .and_then(|_| self.store.save(keys::PINS, &self.doc.pins))
            .and_then(|_| self.store.save(keys::UNDO_STACK, self.history.past()))
            .and_then(|_| self.store.save(keys::REDO_STACK, self.history.future()));

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist session");
                false
            }
        }
    }

    /// Drop selection ids that no longer resolve.
    fn reconcile_selection(&mut self) {
        if let Some(id) = &self.selection.selected_pin {
            if self.doc.pin(id).is_none() {
                self.selection.selected_pin = None;
            }
        }
        if let Some(id) = &self.selection.active_trip {
            if self.doc.trip(id).is_none() {
                self.selection.active_trip = None;
            }
        }
    }

    // ─── Pins ────────────────────────────────────────────────────

    /// Add a pin at `coordinate`. Declined when the coordinate is absent or invalid.
    pub fn add_pin(&mut self, draft: &PinDraft, coordinate: Option<Coordinate>) -> Result<Outcome> {
        let Some(coordinate) = coordinate.filter(Coordinate::is_valid) else {
            tracing::debug!("Add pin declined: no coordinate");
            return Ok(Outcome::declined());
        };

        let id = new_id(&self.rng, "pin", |id| self.doc.pin(id).is_some())?;
        let pin = Pin::from_draft(id.clone(), draft, coordinate, today_utc());
        let outcome = self.commit("add_pin", |doc| {
            doc.insert_pin(pin);
            true
        });

        if outcome.applied {
            tracing::info!(pin_id = %id, lng = coordinate.lng, lat = coordinate.lat, "Pin added");
            self.selection.pending_coordinate = None;
            self.selection.draft = PinDraft::default();
        }
        Ok(outcome)
    }

    /// Add a pin from the current draft at the pending map coordinate.
    pub fn add_pin_from_draft(&mut self) -> Result<Outcome> {
        let draft = self.selection.draft.clone();
        let coordinate = self.selection.pending_coordinate;
        self.add_pin(&draft, coordinate)
    }

    /// Delete a pin and remove it from every trip.
    pub fn delete_pin(&mut self, id: &str) -> Outcome {
        let outcome = self.commit("delete_pin", |doc| doc.remove_pin(id));
        if self.selection.selected_pin.as_deref() == Some(id) {
            self.selection.selected_pin = None;
        }
        outcome
    }

    /// Select a pin (opens its detail). Returns `false` for unknown ids.
    pub fn select_pin(&mut self, id: &str) -> bool {
        if self.doc.pin(id).is_none() {
            return false;
        }
        self.selection.selected_pin = Some(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.selected_pin = None;
    }

    /// Select a pin and fly the camera to it.
    pub fn focus_pin(&mut self, id: &str, zoom: f64, surface: &mut dyn MapSurface) -> bool {
        let Some(coordinate) = self.doc.pin(id).map(|p| p.coordinate) else {
            return false;
        };
        self.selection.selected_pin = Some(id.to_string());
        surface.fly_to(coordinate, zoom);
        true
    }

    /// Replace the in-progress draft fields.
    pub fn set_draft(&mut self, draft: PinDraft) {
        self.selection.draft = draft;
    }

    /// Apply an inbound map interaction. Returns `true` if selection state changed.
    pub fn handle_map_event(&mut self, event: MapEvent) -> bool {
        match event {
            MapEvent::Clicked { lng, lat } => {
                let coordinate = Coordinate::new(lng, lat);
                if !coordinate.is_valid() {
                    return false;
                }
                self.selection.pending_coordinate = Some(coordinate);
                true
            }
            MapEvent::MarkerActivated { pin_id } => self.select_pin(&pin_id),
        }
    }

    // ─── Trips ───────────────────────────────────────────────────

    /// Create an empty trip and make it active. Declined for blank names.
    pub fn create_trip(&mut self, name: &str) -> Result<Outcome> {
        if name.trim().is_empty() {
            tracing::debug!("Create trip declined: blank name");
            return Ok(Outcome::declined());
        }

        let id = new_id(&self.rng, "trip", |id| self.doc.trip(id).is_some())?;
        let trip = Trip::new(id.clone(), name);
        let outcome = self.commit("create_trip", |doc| {
            doc.push_trip(trip);
            true
        });
        if outcome.applied {
            self.selection.active_trip = Some(id);
        }
        Ok(outcome)
    }

    /// Delete a trip; clears the active trip if it was this one.
    pub fn delete_trip(&mut self, trip_id: &str) -> Outcome {
        let outcome = self.commit("delete_trip", |doc| doc.remove_trip(trip_id));
        if self.selection.active_trip.as_deref() == Some(trip_id) {
            self.selection.active_trip = None;
        }
        outcome
    }

    /// Add the pin to the trip, or remove it if already a member.
    pub fn toggle_pin_in_trip(&mut self, trip_id: &str, pin_id: &str) -> Outcome {
        self.commit("toggle_pin_in_trip", |doc| {
            doc.toggle_trip_pin(trip_id, pin_id)
        })
    }

    /// Swap the pin with its neighbour in the trip.
    pub fn reorder_trip_pins(&mut self, trip_id: &str, pin_id: &str, direction: Direction) -> Outcome {
        self.commit("reorder_trip_pins", |doc| {
            doc.move_trip_pin(trip_id, pin_id, direction)
        })
    }

    /// Make a trip's path the one drawn. Returns `false` for unknown ids.
    pub fn show_trip(&mut self, trip_id: &str) -> bool {
        if self.doc.trip(trip_id).is_none() {
            return false;
        }
        self.selection.active_trip = Some(trip_id.to_string());
        true
    }

    // ─── History ─────────────────────────────────────────────────

    pub fn undo(&mut self) -> Outcome {
        match self.history.undo(self.doc.clone()) {
            Some(previous) => self.apply_history_step("undo", previous),
            None => Outcome::declined(),
        }
    }

    pub fn redo(&mut self) -> Outcome {
        match self.history.redo(self.doc.clone()) {
            Some(next) => self.apply_history_step("redo", next),
            None => Outcome::declined(),
        }
    }

    fn apply_history_step(&mut self, action: &'static str, doc: Snapshot) -> Outcome {
        self.doc = doc;
        self.reconcile_selection();
        let persisted = self.persist();
        tracing::info!(
            action,
            undo_depth = self.history.undo_depth(),
            redo_depth = self.history.redo_depth(),
            "History step applied"
        );
        Outcome {
            applied: true,
            persisted,
        }
    }
}
