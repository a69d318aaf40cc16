// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: raw panel offsets and timing for one drag.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::start`] with the panel offset and timestamp at drag start.
//! 2) On each drag sample, call [`DragTracker::update`] with the raw (unclamped) offset.
//! 3) At drag end, read [`DragTracker::total_offset`] and [`DragTracker::elapsed_ms`]
//!    to feed the commit rule, then call [`DragTracker::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_slide_panel::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(0.0, 0.0), 1_000);
//! drag.update(Point::new(40.0, 0.0));
//! drag.update(Point::new(90.0, 0.0));
//!
//! assert_eq!(drag.total_offset().unwrap().x, 90.0);
//! assert_eq!(drag.elapsed_ms(1_120), Some(120));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the raw offsets and start time of the drag in progress.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Panel offset when the drag started.
    pub start_offset: Option<Point>,
    /// Most recent raw offset reported by the draggable.
    pub last_offset: Option<Point>,
    /// Timestamp of the drag start, in milliseconds.
    pub start_ms: Option<u64>,
}

impl DragTracker {
    /// Start tracking a new drag from `offset` at time `now_ms`.
    pub fn start(&mut self, offset: Point, now_ms: u64) {
        self.start_offset = Some(offset);
        self.last_offset = Some(offset);
        self.start_ms = Some(now_ms);
    }

    /// Record a raw offset, returning the movement since the previous sample.
    pub fn update(&mut self, offset: Point) -> Option<Vec2> {
        if !self.is_dragging() {
            return None;
        }
        let delta = self.last_offset.map(|last| offset - last);
        self.last_offset = Some(offset);
        delta
    }

    /// Movement from the drag start to the latest sample.
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.last_offset? - self.start_offset?)
    }

    /// Milliseconds since the drag started.
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        self.start_ms.map(|start| now_ms.saturating_sub(start))
    }

    /// Forget the current drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is tracked.
    pub fn is_dragging(&self) -> bool {
        self.start_offset.is_some()
    }
}
