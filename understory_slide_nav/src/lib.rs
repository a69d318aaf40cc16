// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slide_nav --heading-base-level=0

//! Understory Slide Nav: a hierarchical navigation list behind a sliding
//! content panel.
//!
//! The panel covers the list and can be dragged, flicked, or toggled aside to
//! reveal it. Selecting a leaf swaps the panel's content and (optionally)
//! slides the panel closed again.
//!
//! [`SlideNavigation`] composes the pieces:
//!
//! - [`understory_nav_tree`]: the item tree, leaf numbering, and the row store.
//! - [`selection`]: leaf-only selection that reverts branch selections to the
//!   last valid leaf and skips exactly one close-on-select afterwards.
//! - [`cache`]: per-leaf content, materialized on first selection. Leaves with
//!   a handler run it on every selection instead.
//! - [`understory_slide_panel`]: the drag/flick/toggle state machine.
//! - [`expand`]: staggered fade-in of a branch's children after it expands.
//!
//! Nothing here renders. The host implements [`ContentHost`], [`ListWidget`],
//! and [`PanelHost`], forwards events, and performs the effects it is handed.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_slide_nav::{
//!     ContentHost, LeafIndex, ListWidget, NavItem, PanelHost, SlideNavConfig, SlideNavigation,
//!     Transition,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     views: Vec<()>,
//!     active: Option<usize>,
//!     selected: Option<usize>,
//!     slides: Vec<Transition>,
//! }
//!
//! impl ContentHost<()> for Host {
//!     type View = usize;
//!     fn instantiate(&mut self, _: &()) -> usize {
//!         self.views.push(());
//!         self.views.len() - 1
//!     }
//!     fn set_active_view(&mut self, view: &usize) {
//!         self.active = Some(*view);
//!     }
//! }
//!
//! impl ListWidget for Host {
//!     fn select_row(&mut self, row: usize) {
//!         self.selected = Some(row);
//!     }
//!     fn deselect_row(&mut self, _: usize) {
//!         self.selected = None;
//!     }
//! }
//!
//! impl PanelHost for Host {
//!     fn slide_to(&mut self, t: Transition) {
//!         self.slides.push(t);
//!     }
//!     fn set_open_class(&mut self, _: bool) {}
//! }
//!
//! let items: Vec<NavItem> = vec![
//!     NavItem::branch("A", vec![NavItem::leaf("A1"), NavItem::leaf("A2")]),
//!     NavItem::leaf("B"),
//! ];
//! let mut nav = SlideNavigation::new(SlideNavConfig::default(), items, Host::default()).unwrap();
//!
//! // "A" was expanded and its first leaf selected, without moving the panel.
//! assert_eq!(nav.selection().current(), Some(LeafIndex(0)));
//! assert_eq!(nav.host().selected, Some(1));
//! assert!(nav.host().slides.is_empty());
//!
//! // Open the panel, pick "B": its view is built and the panel closes.
//! let t = nav.toggle(None);
//! nav.on_animation_end(t.generation, t.target_x);
//! nav.on_select(3);
//! assert_eq!(nav.selection().current(), Some(LeafIndex(2)));
//! assert_eq!(nav.host().active, Some(1));
//! assert_eq!(nav.host().slides.last().map(|t| t.target_x), Some(0.0));
//! ```
//!
//! ## Logging
//!
//! State changes are reported through [`tracing`] at `debug` level; drag samples
//! and stale completions at `trace`. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cache;
mod config;
pub mod expand;
mod navigation;
pub mod selection;

pub use cache::{ContentCache, ContentHost, LeafContent, MergeDefaults, Resolution};
pub use config::{
    ConfigError, DEFAULT_LIST_WIDTH, DEFAULT_SELECT_SLIDE_DURATION_MS, SlideNavConfig,
    SlideSelector,
};
pub use expand::{ExpandAnimation, FadeAnimator, RenderedRows};
pub use navigation::{ListWidget, NavHost, PanelHost, SlideNavigation};
pub use selection::{Activation, SelectOutcome, SelectionController, SelectionState};

pub use understory_nav_tree::{Handler, HierarchicalStore, LeafIndex, NavItem, TreeStore};
pub use understory_slide_panel::{AncestorQuery, DragConstraint, Generation, PanelPhase, Transition};
