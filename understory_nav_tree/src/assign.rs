// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order leaf numbering.

use crate::{LeafIndex, NavItem};

/// Monotonic counter threaded through [`assign_indexes_with`].
///
/// The counter only advances when a leaf is numbered automatically. Leaves
/// that arrive with a preset index neither consume nor reserve a value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexCounter {
    next: u32,
}

impl IndexCounter {
    /// A counter starting at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// A counter starting at `next`.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// The value the next automatically numbered leaf will receive.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }

    fn take(&mut self) -> LeafIndex {
        let index = LeafIndex(self.next);
        self.next += 1;
        index
    }
}

/// Numbers every leaf without a preset index, depth-first and pre-order.
///
/// Returns the counter after the pass, so `peek()` equals the number of leaves
/// that were numbered. Branches never receive an index; a stray preset index on
/// a branch is cleared.
///
/// This is a construction-time pass. Running it again over the same tree with a
/// fresh counter would renumber nothing (every leaf already has an index), but
/// running it over a different tree with a used counter continues the sequence.
pub fn assign_indexes<C>(nodes: &mut [NavItem<C>]) -> IndexCounter {
    let mut counter = IndexCounter::new();
    assign_indexes_with(nodes, &mut counter);
    tracing::debug!(numbered = counter.peek(), "assigned navigation leaf indexes");
    counter
}

/// Like [`assign_indexes`], continuing from an existing counter.
pub fn assign_indexes_with<C>(nodes: &mut [NavItem<C>], counter: &mut IndexCounter) {
    for node in nodes {
        if node.is_leaf() {
            if node.index.is_none() {
                node.index = Some(counter.take());
            }
        } else {
            node.index = None;
            assign_indexes_with(&mut node.children, counter);
        }
    }
}

/// Counts the leaves of a forest.
#[must_use]
pub fn leaf_count<C>(nodes: &[NavItem<C>]) -> usize {
    nodes
        .iter()
        .map(|n| if n.is_leaf() { 1 } else { leaf_count(&n.children) })
        .sum()
}
