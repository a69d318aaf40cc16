// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-oriented access to a navigation tree.
//!
//! List widgets see a navigation tree as a flat sequence of *visible rows*: the
//! top-level nodes, plus the children of every expanded branch, in pre-order.
//! [`HierarchicalStore`] is that view; [`TreeStore`] implements it over an owned
//! forest of [`NavItem`]s.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{LeafIndex, NavItem};

/// Row-level contract between a navigation tree and the list that shows it.
///
/// Row numbers are positions in the current visible sequence and shift when
/// branches expand or collapse. Leaf identity across such changes should go
/// through [`LeafIndex`] and [`row_of_index`](Self::row_of_index).
pub trait HierarchicalStore<C> {
    /// Number of visible rows.
    fn len(&self) -> usize;

    /// Returns `true` if no rows are visible.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The node shown at `row`.
    fn get_at(&self, row: usize) -> Option<&NavItem<C>>;

    /// Returns `true` if `row` holds a leaf.
    fn is_leaf(&self, row: usize) -> bool {
        self.get_at(row).is_some_and(NavItem::is_leaf)
    }

    /// Returns `true` if `row` holds an expanded branch.
    fn is_expanded(&self, row: usize) -> bool {
        self.get_at(row).is_some_and(|n| !n.is_leaf() && n.expanded)
    }

    /// Expands the branch at `row`. Returns `true` if the visible rows changed.
    fn expand(&mut self, row: usize) -> bool;

    /// Collapses the branch at `row`. Returns `true` if the visible rows changed.
    fn collapse(&mut self, row: usize) -> bool;

    /// Visible row of the leaf carrying `index`, if it is currently shown.
    fn row_of_index(&self, index: LeafIndex) -> Option<usize> {
        (0..self.len()).find(|&row| self.get_at(row).and_then(|n| n.index) == Some(index))
    }
}

/// Child-position path from a root to a node.
type RowPath = SmallVec<[usize; 4]>;

/// In-memory [`HierarchicalStore`] over an owned forest.
#[derive(Clone, Debug)]
pub struct TreeStore<C> {
    roots: Vec<NavItem<C>>,
    rows: Vec<RowPath>,
}

impl<C> TreeStore<C> {
    /// Builds a store over `roots`.
    ///
    /// With `default_expanded`, every branch starts expanded regardless of its
    /// own flag; otherwise the flags already on the nodes are kept.
    pub fn new(mut roots: Vec<NavItem<C>>, default_expanded: bool) -> Self {
        if default_expanded {
            expand_all(&mut roots);
        }
        let mut store = Self {
            roots,
            rows: Vec::new(),
        };
        store.rebuild_rows();
        store
    }

    /// The whole forest, including collapsed subtrees.
    #[must_use]
    pub fn roots(&self) -> &[NavItem<C>] {
        &self.roots
    }

    /// Nesting depth of `row` (0 for top-level nodes).
    #[must_use]
    pub fn depth(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|path| path.len() - 1)
    }

    /// Iterates over the visible nodes in row order.
    pub fn iter(&self) -> impl Iterator<Item = &NavItem<C>> + '_ {
        self.rows.iter().filter_map(|path| self.node(path))
    }

    fn node(&self, path: &[usize]) -> Option<&NavItem<C>> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    fn node_mut(&mut self, row: usize) -> Option<&mut NavItem<C>> {
        let path = self.rows.get(row)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    fn set_expanded(&mut self, row: usize, expanded: bool) -> bool {
        let Some(node) = self.node_mut(row) else {
            return false;
        };
        if node.is_leaf() || node.expanded == expanded {
            return false;
        }
        node.expanded = expanded;
        self.rebuild_rows();
        tracing::trace!(row, expanded, rows = self.rows.len(), "navigation branch toggled");
        true
    }

    fn rebuild_rows(&mut self) {
        self.rows.clear();
        let mut path = RowPath::new();
        push_visible(&self.roots, &mut path, &mut self.rows);
    }
}

fn expand_all<C>(nodes: &mut [NavItem<C>]) {
    for node in nodes {
        if !node.is_leaf() {
            node.expanded = true;
            expand_all(&mut node.children);
        }
    }
}

fn push_visible<C>(nodes: &[NavItem<C>], path: &mut RowPath, out: &mut Vec<RowPath>) {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        out.push(path.clone());
        if !node.is_leaf() && node.expanded {
            push_visible(&node.children, path, out);
        }
        path.pop();
    }
}

impl<C> HierarchicalStore<C> for TreeStore<C> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn get_at(&self, row: usize) -> Option<&NavItem<C>> {
        self.node(self.rows.get(row)?)
    }

    fn expand(&mut self, row: usize) -> bool {
        self.set_expanded(row, true)
    }

    fn collapse(&mut self, row: usize) -> bool {
        self.set_expanded(row, false)
    }
}
