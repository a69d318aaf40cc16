// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazily materialized per-leaf content.
//!
//! Each leaf resolves to one of two kinds of content, decided the first time it
//! is selected and fixed from then on:
//!
//! - [`LeafContent::Callback`]: the leaf has a [`Handler`]; selecting it runs
//!   the handler, every time, and leaves the visible content alone.
//! - [`LeafContent::View`]: the leaf's descriptor (merged over the configured
//!   defaults) is instantiated into a view once; later selections just make it
//!   the active view again.
//!
//! Entries are never evicted, so the cache holds at most one entry per leaf.

use alloc::collections::BTreeMap;

use hashbrown::HashMap;
use understory_nav_tree::{Handler, LeafIndex, NavItem};

/// Host side of the content container.
pub trait ContentHost<C> {
    /// Handle to an instantiated view.
    type View: Clone;

    /// Builds a view from a merged descriptor and adds it to the container.
    fn instantiate(&mut self, config: &C) -> Self::View;

    /// Makes `view` the one the container displays.
    fn set_active_view(&mut self, view: &Self::View);

    /// Adds a panel toggle button inside `view` at `selector`.
    ///
    /// The host should route the button's release to
    /// [`SlideNavigation::toggle`](crate::SlideNavigation::toggle). The
    /// default does nothing.
    fn attach_slide_button(&mut self, view: &Self::View, selector: &str) {
        let _ = (view, selector);
    }
}

/// Content descriptors that can be layered over defaults.
pub trait MergeDefaults {
    /// Returns `self` laid over `defaults`; values in `self` win.
    #[must_use]
    fn merged_over(&self, defaults: &Self) -> Self;
}

impl MergeDefaults for () {
    fn merged_over(&self, _defaults: &Self) -> Self {}
}

impl<K: Ord + Clone, V: Clone> MergeDefaults for BTreeMap<K, V> {
    fn merged_over(&self, defaults: &Self) -> Self {
        let mut merged = defaults.clone();
        merged.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

/// Cached content for one leaf.
#[derive(Clone, Debug)]
pub enum LeafContent<V> {
    /// Run on every selection.
    Callback(Handler),
    /// Instantiated once, re-activated on later selections.
    View(V),
}

/// What [`ContentCache::resolve`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<V> {
    /// The leaf's handler ran.
    Invoked,
    /// This view is now active; `created` is true on first materialization.
    Activated {
        /// The active view.
        view: V,
        /// Whether the view was instantiated by this call.
        created: bool,
    },
    /// The node has no index (a branch); nothing happened.
    Skipped,
}

/// Per-leaf content cache.
#[derive(Clone, Debug)]
pub struct ContentCache<V> {
    entries: HashMap<LeafIndex, LeafContent<V>>,
}

impl<V> Default for ContentCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V: Clone> ContentCache<V> {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leaves resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached entry for `index`, if resolved before.
    #[must_use]
    pub fn get(&self, index: LeafIndex) -> Option<&LeafContent<V>> {
        self.entries.get(&index)
    }

    /// Shows `node`'s content, materializing it on first use.
    ///
    /// Two nodes sharing an index share an entry: whichever is resolved first
    /// decides its kind and content.
    pub fn resolve<C, H>(&mut self, node: &NavItem<C>, defaults: &C, host: &mut H) -> Resolution<V>
    where
        C: MergeDefaults,
        H: ContentHost<C, View = V> + ?Sized,
    {
        let Some(index) = node.index else {
            return Resolution::Skipped;
        };

        let mut created = false;
        let entry = self.entries.entry(index).or_insert_with(|| {
            if let Some(handler) = &node.handler {
                tracing::debug!(%index, "caching navigation callback");
                LeafContent::Callback(handler.clone())
            } else {
                let view = host.instantiate(&node.content.merged_over(defaults));
                if let Some(selector) = &node.slide_button {
                    host.attach_slide_button(&view, selector);
                }
                created = true;
                tracing::debug!(%index, title = %node.title, "materialized navigation view");
                LeafContent::View(view)
            }
        });

        match entry {
            LeafContent::Callback(handler) => {
                handler.call();
                Resolution::Invoked
            }
            LeafContent::View(view) => {
                host.set_active_view(view);
                Resolution::Activated {
                    view: view.clone(),
                    created,
                }
            }
        }
    }
}
