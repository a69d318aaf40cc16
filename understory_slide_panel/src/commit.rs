// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag commit rule.
//!
//! A finished drag settles either fully open or fully closed. The decision
//! looks at the gesture's direction, its speed, and where the panel was
//! released:
//!
//! - Opening motion (positive `delta_x`): open if the flick was fast **or** the
//!   panel was released past the threshold, else close.
//! - Closing motion (zero or negative `delta_x`): close if the flick was fast
//!   **or** the panel was released short of the threshold, else open.
//!
//! The threshold sits at [`COMMIT_DISTANCE_RATIO`] of the panel width, and a
//! flick is fast above [`COMMIT_VELOCITY`] px/ms.

/// Speed (px/ms) above which a flick commits in its own direction.
pub const COMMIT_VELOCITY: f64 = 0.75;

/// Fraction of the panel width used as the distance threshold.
pub const COMMIT_DISTANCE_RATIO: f64 = 0.70;

/// Terminal state of a drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    /// Settle at offset 0.
    Closed,
    /// Settle at the panel width.
    Open,
}

impl Commit {
    /// Returns `true` for [`Commit::Open`].
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The canonical offset for this state.
    #[must_use]
    pub fn target_x(self, panel_width: f64) -> f64 {
        match self {
            Self::Closed => 0.0,
            Self::Open => panel_width,
        }
    }
}

/// Absolute speed of a gesture in px/ms.
///
/// A gesture with no measurable duration has speed 0, so only its release
/// position decides.
#[must_use]
pub fn velocity(delta_x: f64, elapsed_ms: f64) -> f64 {
    if elapsed_ms > 0.0 {
        let distance = if delta_x < 0.0 { -delta_x } else { delta_x };
        distance / elapsed_ms
    } else {
        0.0
    }
}

/// Decides where a released panel settles.
#[must_use]
pub fn decide(velocity: f64, delta_x: f64, final_x: f64, panel_width: f64) -> Commit {
    let threshold = COMMIT_DISTANCE_RATIO * panel_width;
    let fast = velocity > COMMIT_VELOCITY;
    if delta_x > 0.0 {
        if fast || final_x > threshold {
            Commit::Open
        } else {
            Commit::Closed
        }
    } else if fast || final_x < threshold {
        Commit::Closed
    } else {
        Commit::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 250.0;

    #[test]
    fn fast_flick_opens_despite_small_displacement() {
        assert_eq!(decide(0.8, 10.0, 10.0, WIDTH), Commit::Open);
    }

    #[test]
    fn slow_far_drag_opens() {
        assert_eq!(decide(0.2, 200.0, 200.0, WIDTH), Commit::Open);
    }

    #[test]
    fn slow_short_opening_drag_falls_back_closed() {
        assert_eq!(decide(0.2, 50.0, 100.0, WIDTH), Commit::Closed);
    }

    #[test]
    fn closing_drag_short_of_threshold_closes() {
        assert_eq!(decide(0.2, -150.0, 100.0, WIDTH), Commit::Closed);
    }

    #[test]
    fn slow_closing_drag_past_threshold_stays_open() {
        assert_eq!(decide(0.2, -20.0, 230.0, WIDTH), Commit::Open);
    }

    #[test]
    fn fast_closing_flick_closes_from_far_out() {
        assert_eq!(decide(1.5, -20.0, 230.0, WIDTH), Commit::Closed);
    }

    #[test]
    fn zero_delta_counts_as_closing() {
        assert_eq!(decide(0.0, 0.0, 200.0, WIDTH), Commit::Open);
        assert_eq!(decide(0.0, 0.0, 20.0, WIDTH), Commit::Closed);
    }

    #[test]
    fn velocity_is_absolute_and_guards_zero_time() {
        assert_eq!(velocity(-90.0, 100.0), 0.9);
        assert_eq!(velocity(30.0, 0.0), 0.0);
    }

    #[test]
    fn commit_targets_are_canonical() {
        assert_eq!(Commit::Open.target_x(WIDTH), WIDTH);
        assert_eq!(Commit::Closed.target_x(WIDTH), 0.0);
    }
}
