// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Linear undo/redo history of full document snapshots.
//!
//! ```text
//! record(s0), record(s1)      past: [s0, s1]   future: []
//! undo(current = s2) -> s1    past: [s0]       future: [s2]
//! record(s1')                 past: [s0, s1']  future: []   (redo invalidated)
//! ```

use std::collections::VecDeque;

use crate::models::Snapshot;

/// Two-stack snapshot history.
///
/// Invariants:
/// 1. `future` is empty after every `record`.
/// 2. `past.len() <= limit` when a limit is set.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: VecDeque<Snapshot>,
    /// Maximum undo depth; `None` for unlimited
    limit: Option<usize>,
}

impl History {
    /// Create an empty history. A `limit` of 0 means unlimited.
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: (limit > 0).then_some(limit),
        }
    }

    /// Rebuild a history from persisted stacks (oldest first).
    pub fn restore(past: Vec<Snapshot>, future: Vec<Snapshot>, limit: usize) -> Self {
        let mut history = Self::new(limit);
        history.past = past.into();
        history.future = future.into();
        history.enforce_limit();
        history
    }

    /// Push the pre-mutation state and invalidate redo.
    pub fn record(&mut self, current: Snapshot) {
        self.future.clear();
        self.past.push_back(current);
        self.enforce_limit();
    }

    /// Step back. Returns the state to apply, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push_back(current);
        Some(previous)
    }

    /// Step forward. Returns the state to apply, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop_back()?;
        self.past.push_back(current);
        self.enforce_limit();
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Undo targets, oldest first.
    pub fn past(&self) -> &VecDeque<Snapshot> {
        &self.past
    }

    /// Redo targets, oldest first (the next redo is at the back).
    pub fn future(&self) -> &VecDeque<Snapshot> {
        &self.future
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
    }
}
