// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (local key-value store).

pub mod store;

pub use store::{Store, StoreError};

/// Record keys as constants.
pub mod keys {
    pub const PINS: &str = "pins";
    pub const TRIPS: &str = "trips";
    /// Undo targets (past snapshots)
    pub const UNDO_STACK: &str = "undo_stack";
    /// Redo targets (future snapshots)
    pub const REDO_STACK: &str = "redo_stack";
}
