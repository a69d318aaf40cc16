// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slide_panel --heading-base-level=0

//! Understory Slide Panel: a drag/flick/toggle state machine for a panel that
//! slides aside to reveal a navigation list.
//!
//! The panel moves horizontally between two canonical offsets: `0` (closed,
//! covering the list) and the panel width (open). Gestures in between are
//! resolved into exactly one of the two when they end.
//!
//! - [`SlidePanel`]: the state machine. Feed it drag start/sample/end events and
//!   animation completions; it returns [`Transition`]s for the host to animate.
//! - [`commit`]: the velocity-or-distance rule deciding where a released panel
//!   settles.
//! - [`drag::DragTracker`]: raw offset and timing bookkeeping for one gesture.
//! - [`DragRegion`] and [`AncestorQuery`]: which gestures may start a drag. The
//!   host answers "is this element inside something matching P?"; the panel
//!   never walks element trees itself.
//! - [`SampleThrottle`]: caller-clocked leading-edge throttle for cosmetic
//!   drag samples.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_slide_panel::{DragRegion, PanelPhase, SlidePanel};
//!
//! let mut panel: SlidePanel<&str> = SlidePanel::new(250.0, DragRegion::Anywhere);
//! let query = |_: &u32, _: &&str| true;
//!
//! // A slow drag that ends past 70% of the width opens the panel.
//! assert!(panel.on_drag_start(&7, &query, Point::ZERO, 0));
//! panel.on_drag(Point::new(200.0, 0.0), 500);
//! let t = panel.on_drag_end(1_000).unwrap();
//! assert_eq!(t.target_x, 250.0);
//! assert_eq!(panel.phase(), PanelPhase::Open);
//!
//! // The host animates, then reports completion with the transition's tag.
//! assert_eq!(panel.on_animation_end(t.generation, 250.0), Some(true));
//! assert!(panel.committed_open());
//! ```
//!
//! ## Event ordering
//!
//! Within one gesture, events arrive as `drag start`, any number of `drag`
//! samples, one `drag end`, then at most one completion. A new gesture may
//! start before the previous completion arrives; every drag start and every
//! transition carries a fresh [`Generation`], and completions with an older
//! generation are ignored.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod commit;
pub mod drag;
mod panel;
mod region;
mod throttle;

pub use commit::Commit;
pub use panel::{DEFAULT_SLIDE_DURATION_MS, Generation, PanelPhase, SlidePanel, Transition};
pub use region::{AncestorQuery, DragConstraint, DragRegion};
pub use throttle::{DRAG_SAMPLE_INTERVAL_MS, SampleThrottle};
