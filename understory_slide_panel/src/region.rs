// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a drag may start, and how far the panel may travel.

use kurbo::{Point, Size};

/// Capability query answered by the rendering layer.
///
/// Returns `true` if `element` is, or sits inside, an element matching
/// `predicate`. The predicate type is owned by the host (a class name, a
/// widget tag, a box-tree flag...); this crate never interprets it.
pub trait AncestorQuery<E: ?Sized, P: ?Sized> {
    /// Returns `true` if `element` or one of its ancestors matches `predicate`.
    fn matches_ancestor(&self, element: &E, predicate: &P) -> bool;
}

impl<E: ?Sized, P: ?Sized, F> AncestorQuery<E, P> for F
where
    F: Fn(&E, &P) -> bool,
{
    fn matches_ancestor(&self, element: &E, predicate: &P) -> bool {
        self(element, predicate)
    }
}

/// Part of the panel from which a drag may start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragRegion<P> {
    /// The whole panel is draggable.
    #[default]
    Anywhere,
    /// Only gestures starting inside an element matching `P`.
    Within(P),
    /// Dragging is turned off; the panel only moves programmatically.
    Disabled,
}

impl<P> DragRegion<P> {
    /// Returns `true` if a gesture starting at `origin` may drag the panel.
    pub fn admits<E, Q>(&self, origin: &E, query: &Q) -> bool
    where
        E: ?Sized,
        Q: AncestorQuery<E, P> + ?Sized,
    {
        match self {
            Self::Anywhere => true,
            Self::Within(predicate) => query.matches_ancestor(origin, predicate),
            Self::Disabled => false,
        }
    }
}

/// Bounds handed to the host's draggable behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConstraint {
    /// Smallest allowed offset.
    pub min: Point,
    /// Largest allowed offset.
    pub max: Point,
}

impl DragConstraint {
    /// Horizontal-only bounds from `0` to `max_drag`.
    ///
    /// Without an explicit `max_drag`, the larger screen dimension is used so
    /// the panel can be dragged fully aside in either orientation.
    #[must_use]
    pub fn new(max_drag: Option<f64>, screen: Size) -> Self {
        let max_x = max_drag.unwrap_or(screen.width.max(screen.height));
        Self {
            min: Point::ZERO,
            max: Point::new(max_x, 0.0),
        }
    }
}
