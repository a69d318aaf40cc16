// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf-only selection with a last-valid fallback.
//!
//! A navigation list widget will happily select any row, including branch
//! headers. [`SelectionController`] keeps the application-level selection on
//! leaves only:
//!
//! - A branch reaching the selection path is rejected and the previous leaf is
//!   restored ([`SelectOutcome::Revert`]).
//! - Restoring the previous leaf re-selects it, which would normally close the
//!   panel. A rejection therefore suppresses exactly one close-on-select.
//!
//! Taps ([`SelectionController::on_activate`]) are independent of selection:
//! they only expand or collapse branches.

use understory_nav_tree::{HierarchicalStore, LeafIndex};

/// Bookkeeping behind [`SelectionController`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Leaf currently shown.
    pub current: Option<LeafIndex>,
    /// Leaf to fall back to when a branch is selected.
    pub previous_valid: Option<LeafIndex>,
    /// One-shot flag: skip the next close-on-select.
    pub close_suppressed: bool,
}

/// Result of a tap on a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The branch at this row was expanded.
    Expanded(usize),
    /// The branch at this row was collapsed.
    Collapsed(usize),
    /// The row is a leaf; taps on leaves do nothing here.
    Leaf(usize),
    /// No such row.
    Missing,
}

/// What the caller should do after a selection change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Show this leaf's content, then close the panel if `close` is set.
    Show {
        /// The selected leaf.
        index: LeafIndex,
        /// Whether to close the panel.
        close: bool,
    },
    /// A branch was selected: deselect it and re-select `to`, if any.
    ///
    /// Nothing else (content, panel) should change.
    Revert {
        /// The last valid leaf.
        to: Option<LeafIndex>,
    },
}

/// Leaf-only selection state machine.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// A controller with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bookkeeping.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Leaf currently shown.
    #[must_use]
    pub fn current(&self) -> Option<LeafIndex> {
        self.state.current
    }

    /// Handles a tap on `row`: toggles branches, ignores leaves.
    pub fn on_activate<C, S>(&self, store: &mut S, row: usize) -> Activation
    where
        S: HierarchicalStore<C> + ?Sized,
    {
        if row >= store.len() {
            return Activation::Missing;
        }
        if store.is_leaf(row) {
            return Activation::Leaf(row);
        }
        if store.is_expanded(row) {
            store.collapse(row);
            Activation::Collapsed(row)
        } else {
            store.expand(row);
            Activation::Expanded(row)
        }
    }

    /// Handles the list's selection moving to a node with `index`.
    ///
    /// `index` is `None` for branches. `close_on_select` is the configured
    /// option; the returned outcome already accounts for suppression.
    pub fn on_select(&mut self, index: Option<LeafIndex>, close_on_select: bool) -> SelectOutcome {
        let Some(index) = index else {
            self.state.close_suppressed = true;
            tracing::debug!(
                to = ?self.state.previous_valid,
                "branch selected; reverting to the previous leaf"
            );
            return SelectOutcome::Revert {
                to: self.state.previous_valid,
            };
        };

        self.state.previous_valid = Some(index);
        self.state.current = Some(index);

        let mut close = close_on_select;
        if close_on_select && self.state.close_suppressed {
            self.state.close_suppressed = false;
            close = false;
        }
        SelectOutcome::Show { index, close }
    }
}

/// Row to select at startup, expanding the first node if it is a branch.
///
/// A leaf at row 0 is selected directly. Otherwise the first branch is expanded
/// and row 1 (its first child) is selected. Returns `None` for an empty store.
pub fn initial_row<C, S>(store: &mut S) -> Option<usize>
where
    S: HierarchicalStore<C> + ?Sized,
{
    if store.is_empty() {
        return None;
    }
    if store.is_leaf(0) {
        Some(0)
    } else {
        store.expand(0);
        Some(1)
    }
}
