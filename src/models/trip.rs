// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trip model: an ordered route through existing pins.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored trip record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Trip {
    /// Opaque unique identifier
    pub id: String,
    /// Trip name (trimmed, non-empty)
    pub name: String,
    /// Pin ids in visiting order, without duplicates
    #[serde(default)]
    pub pin_ids: Vec<String>,
}

/// Direction for moving a pin within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Direction {
    /// Towards the start of the trip
    Up,
    /// Towards the end of the trip
    Down,
}

impl Trip {
    pub fn new(id: String, name: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            pin_ids: Vec::new(),
        }
    }

    pub fn contains(&self, pin_id: &str) -> bool {
        self.pin_ids.iter().any(|id| id == pin_id)
    }

    /// Remove the pin if present, otherwise append it.
    pub fn toggle(&mut self, pin_id: &str) {
        if let Some(pos) = self.pin_ids.iter().position(|id| id == pin_id) {
            self.pin_ids.remove(pos);
        } else {
            self.pin_ids.push(pin_id.to_string());
        }
    }

    /// Swap the pin with its neighbour in `direction`.
    ///
    /// Returns `false` if the pin is absent or already at that end.
    pub fn move_pin(&mut self, pin_id: &str, direction: Direction) -> bool {
        let Some(pos) = self.pin_ids.iter().position(|id| id == pin_id) else {
            return false;
        };
        let target = match direction {
            Direction::Up => pos.checked_sub(1),
            Direction::Down => Some(pos + 1).filter(|&t| t < self.pin_ids.len()),
        };
        match target {
            Some(target) => {
                self.pin_ids.swap(pos, target);
                true
            }
            None => false,
        }
    }

    /// Drop every occurrence of `pin_id`. Returns `true` if anything was removed.
    pub fn remove_pin(&mut self, pin_id: &str) -> bool {
        let before = self.pin_ids.len();
        self.pin_ids.retain(|id| id != pin_id);
        self.pin_ids.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip_with(ids: &[&str]) -> Trip {
        Trip {
            id: "t1".to_string(),
            name: "Test".to_string(),
            pin_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_new_trims_name() {
        let trip = Trip::new("t1".into(), "  Baltic Tour ");
        assert_eq!(trip.name, "Baltic Tour");
        assert!(trip.pin_ids.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut trip = trip_with(&["a", "b"]);
        trip.toggle("c");
        assert_eq!(trip.pin_ids, vec!["a", "b", "c"]);
        trip.toggle("c");
        assert_eq!(trip.pin_ids, vec!["a", "b"]);

        trip.toggle("a");
        trip.toggle("a");
        // Re-adding appends at the end
        assert_eq!(trip.pin_ids, vec!["b", "a"]);
    }

    #[test]
    fn test_move_pin_bounds() {
        let mut trip = trip_with(&["a", "b", "c"]);
        assert!(!trip.move_pin("a", Direction::Up));
        assert!(!trip.move_pin("c", Direction::Down));
        assert!(!trip.move_pin("zzz", Direction::Up));
        assert_eq!(trip.pin_ids, vec!["a", "b", "c"]);

        assert!(trip.move_pin("c", Direction::Up));
        assert_eq!(trip.pin_ids, vec!["a", "c", "b"]);
        assert!(trip.move_pin("a", Direction::Down));
        assert_eq!(trip.pin_ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_remove_pin_reports_change() {
        let mut trip = trip_with(&["a", "b"]);
        assert!(trip.remove_pin("a"));
        assert!(!trip.remove_pin("a"));
        assert_eq!(trip.pin_ids, vec!["b"]);
    }
}
