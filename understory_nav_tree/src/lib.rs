// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_tree --heading-base-level=0

//! Understory Nav Tree: navigation item trees for drawer-style menus.
//!
//! This crate models the static tree of entries shown in a navigation list:
//! branches that expand and collapse, and leaves that each stand for one piece
//! of content. It provides three building blocks:
//!
//! - [`NavItem`]: a node with a title, children, an optional callback
//!   [`Handler`], an opaque content descriptor `C`, and (for leaves) a
//!   [`LeafIndex`].
//! - [`assign_indexes`]: a one-shot, pre-order pass that numbers every leaf that
//!   does not already carry an index. The counter is an explicit
//!   [`IndexCounter`] value, never global state.
//! - [`HierarchicalStore`]: the row-oriented contract a list widget consumes
//!   (row lookup, leaf/branch predicate, expand/collapse), with [`TreeStore`] as
//!   an in-memory implementation over a `Vec<NavItem<C>>`.
//!
//! The crate knows nothing about rendering. Hosts map rows to widgets and feed
//! taps back as row numbers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_nav_tree::{HierarchicalStore, LeafIndex, NavItem, TreeStore, assign_indexes};
//!
//! let mut items: Vec<NavItem> = vec![
//!     NavItem::branch("A", vec![NavItem::leaf("A1"), NavItem::leaf("A2")]),
//!     NavItem::leaf("B"),
//! ];
//! let counter = assign_indexes(&mut items);
//! assert_eq!(counter.peek(), 3);
//!
//! let mut store = TreeStore::new(items, false);
//! // Only the top level is visible until "A" is expanded.
//! assert_eq!(store.len(), 2);
//! assert!(store.expand(0));
//! assert_eq!(store.len(), 4);
//! assert_eq!(store.get_at(1).and_then(|n| n.index), Some(LeafIndex(0)));
//! assert_eq!(store.row_of_index(LeafIndex(2)), Some(3));
//! ```
//!
//! ## Preset indices
//!
//! A leaf may arrive with its own index. Such leaves are left untouched and the
//! counter is **not** advanced or adjusted for them; subsequent leaves keep
//! counting from wherever the counter was. Callers who mix preset and automatic
//! indices are responsible for keeping them unique.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod assign;
mod item;
mod store;

pub use assign::{IndexCounter, assign_indexes, assign_indexes_with, leaf_count};
pub use item::{Handler, LeafIndex, NavItem};
pub use store::{HierarchicalStore, TreeStore};
