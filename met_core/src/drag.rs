// Copyright 2026 the Met Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-reposition arithmetic.
//!
//! The panel is absolutely positioned. A drag records where inside the panel
//! the pointer went down; on drop, the panel moves by the pointer's travel:
//!
//! ```text
//!   destination = original offset + (end offset - start offset)
//! ```
//!
//! Positions are not persisted.

/// A 2D offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Offset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tracks one drag gesture at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    start: Option<Offset>,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { start: None }
    }

    /// Records the pointer offset inside the panel at drag start.
    pub fn begin(&mut self, pointer: Offset) {
        self.start = Some(pointer);
    }

    /// Finishes the drag and returns the panel's new `left`/`top`.
    ///
    /// `panel` is the panel's current offset within its positioned ancestor;
    /// `pointer` is the pointer offset at drop. A drop without a recorded
    /// start moves the panel by the raw pointer offset.
    pub fn end(&mut self, panel: Offset, pointer: Offset) -> Offset {
        let start = self.start.take().unwrap_or_default();
        Offset {
            x: panel.x + pointer.x - start.x,
            y: panel.y + pointer.y - start.y,
        }
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
