// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - state, history, and view logic.

pub mod history;
pub mod projection;
pub mod session;
pub mod surface;

pub use history::History;
pub use projection::{project, MapView};
pub use session::{Outcome, Session};
pub use surface::{CommandBuffer, MapEvent, MapSurface, SurfaceCommand};
