// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered fade-in of a branch's children after it expands.

use smallvec::SmallVec;

/// Delay of the first faded row, in milliseconds.
pub const FIRST_FADE_DELAY_MS: u64 = 150;

/// Stagger between subsequent rows, in milliseconds.
pub const FADE_STAGGER_MS: u64 = 300;

/// Read-only view of the rows the list widget currently renders.
pub trait RenderedRows {
    /// Handle to a row's content sub-element.
    type Element;

    /// Number of rendered rows.
    fn len(&self) -> usize;

    /// Returns `true` if no rows are rendered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `row` carries the selected-header marker.
    fn is_selected_header(&self, row: usize) -> bool;

    /// The content sub-element of `row`, or `None` if the row has none.
    fn content_element(&self, row: usize) -> Option<Self::Element>;
}

/// Fade animation engine.
pub trait FadeAnimator<E> {
    /// Starts fading `element` in after `delay_ms`.
    fn fade_in(&mut self, element: E, delay_ms: u64);
}

/// Delay for the `i`-th faded row.
#[must_use]
pub fn fade_delay_ms(i: usize) -> u64 {
    if i == 0 {
        FIRST_FADE_DELAY_MS
    } else {
        i as u64 * FADE_STAGGER_MS
    }
}

/// Content elements to fade, scanning from `start`.
///
/// Rows before the selected-header marker are skipped. After it, content
/// elements are collected until a row without one (or the end) is reached.
pub fn collect_fade_targets<R>(rows: &R, start: usize) -> SmallVec<[R::Element; 8]>
where
    R: RenderedRows + ?Sized,
{
    let mut targets = SmallVec::new();
    let mut found_header = false;
    for row in start..rows.len() {
        if !found_header {
            found_header = rows.is_selected_header(row);
            continue;
        }
        match rows.content_element(row) {
            Some(element) => targets.push(element),
            None => break,
        }
    }
    targets
}

/// Runs the expand fade when enabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExpandAnimation {
    enabled: bool,
}

impl ExpandAnimation {
    /// An animation that runs only if `enabled`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns `true` if expansions fade their children in.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fades in the rows following the expanded header at or after `start`.
    ///
    /// Returns the number of fades started.
    pub fn run<R, A>(&self, rows: &R, animator: &mut A, start: usize) -> usize
    where
        R: RenderedRows + ?Sized,
        A: FadeAnimator<R::Element> + ?Sized,
    {
        if !self.enabled {
            return 0;
        }
        let targets = collect_fade_targets(rows, start);
        let count = targets.len();
        for (i, element) in targets.into_iter().enumerate() {
            animator.fade_in(element, fade_delay_ms(i));
        }
        tracing::trace!(start, count, "expand fade");
        count
    }
}
