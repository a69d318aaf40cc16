// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sliding panel state machine.

use kurbo::Point;

use crate::commit::{self, Commit};
use crate::drag::DragTracker;
use crate::region::{AncestorQuery, DragRegion};
use crate::throttle::SampleThrottle;

/// Default slide animation length, in milliseconds.
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 100;

/// Offsets below this count as closed for cosmetic drag sampling.
const CLOSED_SAMPLE_EPSILON: f64 = 1.0;

/// Coarse state of the panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    /// Covering the navigation list (offset 0), or animating there.
    Closed,
    /// Revealing the list (offset = panel width), or animating there.
    Open,
    /// Following a gesture.
    Dragging,
}

/// Tag distinguishing transitions so stale completions can be dropped.
///
/// Every drag start and every committed transition bumps the generation. An
/// animation completion only applies if it carries the current generation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A committed move the host should animate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Canonical target offset: 0 or the panel width.
    pub target_x: f64,
    /// Animation length; 0 means "jump", and the panel has already settled.
    pub duration_ms: u64,
    /// Tag to echo back through [`SlidePanel::on_animation_end`].
    pub generation: Generation,
}

impl Transition {
    /// Returns `true` if this transition ends open.
    #[must_use]
    pub fn opens(&self) -> bool {
        self.target_x > 0.0
    }
}

/// Drag/flick/toggle controller for a panel sliding over a navigation list.
///
/// The panel does not animate anything itself. It consumes gesture samples and
/// completion notifications, and hands back [`Transition`]s for the host's
/// draggable behavior to perform.
///
/// ## Presentation class
///
/// Hosts typically style the panel differently while the list is revealed
/// (shadow, masking). [`is_open_class`](Self::is_open_class) tracks that flag:
/// - during a drag it follows throttled samples (purely cosmetic);
/// - [`open`](Self::open) sets it immediately;
/// - otherwise it is only settled by [`on_animation_end`](Self::on_animation_end),
///   from the final offset alone.
#[derive(Clone, Debug)]
pub struct SlidePanel<P> {
    width: f64,
    region: DragRegion<P>,
    slide_duration_ms: u64,
    phase: PanelPhase,
    offset_x: f64,
    committed_open: bool,
    open_class: bool,
    generation: Generation,
    pending: Option<Generation>,
    tracker: DragTracker,
    throttle: SampleThrottle,
}

impl<P> SlidePanel<P> {
    /// A closed panel travelling `width` pixels, draggable within `region`.
    ///
    /// Negative or non-finite widths are treated as 0.
    #[must_use]
    pub fn new(width: f64, region: DragRegion<P>) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
        Self {
            width,
            region,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            phase: PanelPhase::Closed,
            offset_x: 0.0,
            committed_open: false,
            open_class: false,
            generation: Generation::default(),
            pending: None,
            tracker: DragTracker::default(),
            throttle: SampleThrottle::default(),
        }
    }

    /// Sets the default duration for drag commits and toggles.
    #[must_use]
    pub fn with_slide_duration(mut self, duration_ms: u64) -> Self {
        self.slide_duration_ms = duration_ms;
        self
    }

    /// Starts fully open (already settled) instead of closed.
    #[must_use]
    pub fn start_open(mut self, open: bool) -> Self {
        self.phase = if open {
            PanelPhase::Open
        } else {
            PanelPhase::Closed
        };
        self.offset_x = if open { self.width } else { 0.0 };
        self.committed_open = open;
        self.open_class = open;
        self
    }

    /// Travel distance in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Default animation duration.
    #[must_use]
    pub fn slide_duration_ms(&self) -> u64 {
        self.slide_duration_ms
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Last clamped drag offset, or the target of the latest transition.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Open/closed state confirmed by the latest completed transition.
    #[must_use]
    pub fn committed_open(&self) -> bool {
        self.committed_open
    }

    /// Returns `true` if no transition is awaiting its completion.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_none() && self.phase != PanelPhase::Dragging
    }

    /// Cosmetic "open" presentation flag.
    #[must_use]
    pub fn is_open_class(&self) -> bool {
        self.open_class
    }

    /// Generation of the latest drag start or transition.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns `true` if the panel is (or is heading) fully closed.
    ///
    /// While dragging, this is whether the panel currently sits at offset 0.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match self.phase {
            PanelPhase::Closed => true,
            PanelPhase::Open => false,
            PanelPhase::Dragging => self.offset_x <= 0.0,
        }
    }

    /// Handles a drag start at `origin`.
    ///
    /// Returns `false` if the gesture lies outside the drag region (or dragging
    /// is disabled); the panel then ignores the rest of the gesture.
    pub fn on_drag_start<E, Q>(&mut self, origin: &E, query: &Q, offset: Point, now_ms: u64) -> bool
    where
        E: ?Sized,
        Q: AncestorQuery<E, P> + ?Sized,
    {
        if !self.region.admits(origin, query) {
            tracing::debug!("drag start outside the drag region; ignored");
            return false;
        }
        self.generation = self.generation.next();
        self.pending = None;
        self.phase = PanelPhase::Dragging;
        self.offset_x = self.clamp(offset.x);
        self.tracker.start(offset, now_ms);
        self.throttle.reset();
        tracing::debug!(offset_x = self.offset_x, generation = self.generation.0, "panel drag started");
        true
    }

    /// Handles a drag sample carrying the draggable's raw offset.
    ///
    /// Returns the new presentation flag when a throttled sample changed it.
    pub fn on_drag(&mut self, raw_offset: Point, now_ms: u64) -> Option<bool> {
        if self.phase != PanelPhase::Dragging {
            return None;
        }
        self.tracker.update(raw_offset);
        self.offset_x = self.clamp(raw_offset.x);
        if !self.throttle.ready(now_ms) {
            return None;
        }
        let open = self.offset_x >= CLOSED_SAMPLE_EPSILON;
        tracing::trace!(offset_x = self.offset_x, open, "drag sample");
        if open == self.open_class {
            return None;
        }
        self.open_class = open;
        Some(open)
    }

    /// Handles the end of a drag, measuring the gesture from tracked samples.
    pub fn on_drag_end(&mut self, now_ms: u64) -> Option<Transition> {
        let delta_x = self.tracker.total_offset().map_or(0.0, |d| d.x);
        let elapsed_ms = self.tracker.elapsed_ms(now_ms).unwrap_or(0) as f64;
        self.on_drag_end_with(delta_x, elapsed_ms)
    }

    /// Handles the end of a drag with gesture figures measured by the host.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn on_drag_end_with(&mut self, delta_x: f64, elapsed_ms: f64) -> Option<Transition> {
        if self.phase != PanelPhase::Dragging {
            return None;
        }
        let velocity = commit::velocity(delta_x, elapsed_ms);
        let decision = commit::decide(velocity, delta_x, self.offset_x, self.width);
        tracing::debug!(
            velocity,
            delta_x,
            final_x = self.offset_x,
            ?decision,
            "panel drag committed"
        );
        Some(self.commit(decision, self.slide_duration_ms))
    }

    /// Slides fully open. `None` uses the default duration.
    pub fn open(&mut self, duration_ms: Option<u64>) -> Transition {
        self.open_class = true;
        self.commit(Commit::Open, duration_ms.unwrap_or(self.slide_duration_ms))
    }

    /// Slides fully closed. `None` uses the default duration.
    pub fn close(&mut self, duration_ms: Option<u64>) -> Transition {
        self.commit(Commit::Closed, duration_ms.unwrap_or(self.slide_duration_ms))
    }

    /// Slides to the opposite of [`is_closed`](Self::is_closed).
    pub fn toggle(&mut self, duration_ms: Option<u64>) -> Transition {
        if self.is_closed() {
            self.open(duration_ms)
        } else {
            self.close(duration_ms)
        }
    }

    /// Handles the host's animation completion.
    ///
    /// Only the completion of the transition still awaiting one is applied,
    /// and only once. Anything else (an outdated generation, a repeat, a
    /// report for a zero-duration transition that settled on its own) is
    /// ignored and returns `None`. Otherwise the panel settles according to
    /// `final_x` (0 is closed, anything else open) and the settled
    /// presentation flag is returned.
    pub fn on_animation_end(&mut self, generation: Generation, final_x: f64) -> Option<bool> {
        if self.pending != Some(generation) {
            tracing::trace!(
                stale = generation.0,
                current = self.generation.0,
                "ignoring animation end with no pending transition"
            );
            return None;
        }
        let open = final_x != 0.0;
        self.settle(open);
        self.offset_x = self.clamp(final_x);
        Some(open)
    }

    fn commit(&mut self, to: Commit, duration_ms: u64) -> Transition {
        self.tracker.end();
        self.generation = self.generation.next();
        let target_x = to.target_x(self.width);
        self.phase = if to.is_open() {
            PanelPhase::Open
        } else {
            PanelPhase::Closed
        };
        self.offset_x = target_x;
        if duration_ms == 0 {
            self.settle(to.is_open());
        } else {
            self.pending = Some(self.generation);
        }
        Transition {
            target_x,
            duration_ms,
            generation: self.generation,
        }
    }

    fn settle(&mut self, open: bool) {
        self.phase = if open {
            PanelPhase::Open
        } else {
            PanelPhase::Closed
        };
        self.committed_open = open;
        self.open_class = open;
        self.pending = None;
    }

    fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() { 0.0 } else { x.clamp(0.0, self.width) }
    }
}
