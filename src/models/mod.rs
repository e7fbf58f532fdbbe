// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod pin;
pub mod selection;
pub mod snapshot;
pub mod trip;

pub use pin::{seed_pins, Category, Coordinate, Pin, PinDraft};
pub use selection::Selection;
pub use snapshot::Snapshot;
pub use trip::{Direction, Trip};
