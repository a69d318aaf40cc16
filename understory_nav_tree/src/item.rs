// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation item nodes.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Identifier of a leaf in a navigation tree.
///
/// Indices are unique across one tree and stable for its lifetime; they key
/// per-leaf content caches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafIndex(pub u32);

impl fmt::Display for LeafIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A side-effecting callback attached to a leaf.
///
/// Leaves with a handler do not materialize any content; selecting them runs
/// the callback instead. Handlers are reference counted so that trees and
/// caches can share them cheaply.
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn()>);

impl Handler {
    /// Wraps a closure as a handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Runs the callback.
    pub fn call(&self) {
        (self.0)();
    }

    /// Returns `true` if both handlers share the same callback allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// One entry of a navigation tree.
///
/// A node is a leaf iff it has no children. After [`assign_indexes`] runs,
/// exactly the leaves carry an [`index`](Self::index).
///
/// `C` is an opaque content descriptor. It is only interpreted by whoever
/// instantiates views for leaves; the tree never looks inside it.
///
/// [`assign_indexes`]: crate::assign_indexes
#[derive(Clone, Debug)]
pub struct NavItem<C = ()> {
    /// Text shown in the navigation list.
    pub title: String,
    /// Leaf identifier; `None` on branches.
    pub index: Option<LeafIndex>,
    /// Ordered children; empty for leaves.
    pub children: Vec<NavItem<C>>,
    /// Callback to run instead of showing content.
    pub handler: Option<Handler>,
    /// Per-leaf content configuration.
    pub content: C,
    /// Where to attach a panel toggle button inside this leaf's view, if anywhere.
    pub slide_button: Option<String>,
    /// Expansion flag (branches only). Mutated by the store, not by controllers.
    pub expanded: bool,
}

impl<C: Default> NavItem<C> {
    /// Creates a leaf with default content.
    pub fn leaf(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            index: None,
            children: Vec::new(),
            handler: None,
            content: C::default(),
            slide_button: None,
            expanded: false,
        }
    }

    /// Creates a collapsed branch.
    pub fn branch(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            children,
            ..Self::leaf(title)
        }
    }
}

impl<C> NavItem<C> {
    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Presets the leaf index, bypassing automatic numbering.
    #[must_use]
    pub fn with_index(mut self, index: LeafIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Attaches a callback; the leaf will never materialize a view.
    #[must_use]
    pub fn with_handler(mut self, f: impl Fn() + 'static) -> Self {
        self.handler = Some(Handler::new(f));
        self
    }

    /// Replaces the content descriptor.
    #[must_use]
    pub fn with_content(mut self, content: C) -> Self {
        self.content = content;
        self
    }

    /// Requests a panel toggle button inside this leaf's view at `selector`.
    #[must_use]
    pub fn with_slide_button(mut self, selector: impl Into<String>) -> Self {
        self.slide_button = Some(selector.into());
        self
    }

    /// Sets the initial expansion flag.
    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }
}
