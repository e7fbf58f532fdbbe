// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The (pins, trips) aggregate and its invariant-preserving transformations.
//!
//! A `Snapshot` is both the live document and the unit stored on the
//! undo/redo stacks. The methods here are pure in-memory edits; history
//! bookkeeping and persistence live in `services::session`.

use serde::{Deserialize, Serialize};

use crate::models::{Direction, Pin, Trip};

/// Full document state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl Snapshot {
    pub fn new(pins: Vec<Pin>, trips: Vec<Trip>) -> Self {
        Self { pins, trips }
    }

    pub fn pin(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    fn trip_mut(&mut self, id: &str) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.id == id)
    }

    /// Insert a pin at the front (most recent first).
    pub fn insert_pin(&mut self, pin: Pin) {
        self.pins.insert(0, pin);
    }

    /// Remove a pin and cascade the removal into every trip.
    ///
    /// Returns `true` if the document changed.
    pub fn remove_pin(&mut self, id: &str) -> bool {
        let before = self.pins.len();
        self.pins.retain(|p| p.id != id);
        let mut changed = self.pins.len() != before;
        for trip in &mut self.trips {
            changed |= trip.remove_pin(id);
        }
        changed
    }

    pub fn push_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Returns `true` if a trip was removed.
    pub fn remove_trip(&mut self, id: &str) -> bool {
        let before = self.trips.len();
        self.trips.retain(|t| t.id != id);
        self.trips.len() != before
    }

    /// Toggle `pin_id` in the trip.
    ///
    /// Returns `false` if the trip does not exist, or if the pin neither
    /// exists nor is already a member. Removing a dangling member is allowed.
    pub fn toggle_trip_pin(&mut self, trip_id: &str, pin_id: &str) -> bool {
        let pin_exists = self.pin(pin_id).is_some();
        match self.trip_mut(trip_id) {
            Some(trip) if pin_exists || trip.contains(pin_id) => {
                trip.toggle(pin_id);
                true
            }
            _ => false,
        }
    }

    /// Swap `pin_id` with its neighbour inside the trip.
    pub fn move_trip_pin(&mut self, trip_id: &str, pin_id: &str, direction: Direction) -> bool {
        self.trip_mut(trip_id)
            .is_some_and(|trip| trip.move_pin(pin_id, direction))
    }
}
