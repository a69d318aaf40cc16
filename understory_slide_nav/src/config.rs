// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time options.

use alloc::string::String;

use understory_slide_panel::{DEFAULT_SLIDE_DURATION_MS, DragConstraint, DragRegion};

/// Default navigation list width, in pixels.
pub const DEFAULT_LIST_WIDTH: f64 = 250.0;

/// Default duration of the close that follows a selection, in milliseconds.
pub const DEFAULT_SELECT_SLIDE_DURATION_MS: u64 = 300;

/// Errors detected while building a [`SlideNavigation`](crate::SlideNavigation).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The item list was empty.
    #[error("slide navigation needs at least one top-level item")]
    NoItems,
    /// `list_width` was zero, negative, or not finite.
    #[error("list width must be a positive number of pixels, got {0}")]
    InvalidListWidth(f64),
}

/// Which part of the content panel may start a drag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SlideSelector {
    /// The entire panel.
    #[default]
    Anywhere,
    /// Only inside elements matching this selector (for example a toolbar class).
    Within(String),
    /// Dragging is off; the panel only moves via toggle, open, and close.
    Disabled,
}

impl From<&str> for SlideSelector {
    /// An empty selector means the whole panel.
    fn from(selector: &str) -> Self {
        if selector.is_empty() {
            Self::Anywhere
        } else {
            Self::Within(selector.into())
        }
    }
}

impl SlideSelector {
    /// The panel-level drag region for this selector.
    #[must_use]
    pub fn to_region(&self) -> DragRegion<String> {
        match self {
            Self::Anywhere => DragRegion::Anywhere,
            Self::Within(selector) => DragRegion::Within(selector.clone()),
            Self::Disabled => DragRegion::Disabled,
        }
    }
}

/// Options for a [`SlideNavigation`](crate::SlideNavigation).
///
/// `C` is the content descriptor type; [`defaults`](Self::defaults) is merged
/// under every leaf's own descriptor before its view is instantiated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, bound(deserialize = "C: serde::Deserialize<'de> + Default"))
)]
pub struct SlideNavConfig<C> {
    /// Panel travel distance, which is also the visible list width.
    pub list_width: f64,
    /// Upper drag bound; `None` uses the larger screen dimension.
    pub max_drag: Option<f64>,
    /// Content configuration applied under every leaf's own.
    pub defaults: C,
    /// Where drags may start.
    pub slide_selector: SlideSelector,
    /// Duration of drag commits and toggles.
    pub slide_duration_ms: u64,
    /// Duration of the close that follows a selection.
    pub select_slide_duration_ms: u64,
    /// Close the panel after a leaf is selected.
    pub close_on_select: bool,
    /// Start with every branch expanded.
    pub default_expanded: bool,
    /// Fade in children when a branch expands.
    pub use_animation: bool,
    /// Start with the panel open.
    pub start_open: bool,
}

impl<C: Default> Default for SlideNavConfig<C> {
    fn default() -> Self {
        Self {
            list_width: DEFAULT_LIST_WIDTH,
            max_drag: None,
            defaults: C::default(),
            slide_selector: SlideSelector::Anywhere,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            select_slide_duration_ms: DEFAULT_SELECT_SLIDE_DURATION_MS,
            close_on_select: true,
            default_expanded: false,
            use_animation: true,
            start_open: false,
        }
    }
}

impl<C> SlideNavConfig<C> {
    /// Drops slide animations: the panel jumps to its target.
    ///
    /// Useful on platforms where animated transforms are too slow.
    #[must_use]
    pub fn without_animation(mut self) -> Self {
        self.slide_duration_ms = 0;
        self.select_slide_duration_ms = 0;
        self
    }

    /// Sets the list width.
    #[must_use]
    pub fn with_list_width(mut self, width: f64) -> Self {
        self.list_width = width;
        self
    }

    /// Sets the content defaults.
    #[must_use]
    pub fn with_defaults(mut self, defaults: C) -> Self {
        self.defaults = defaults;
        self
    }

    /// Sets the drag region.
    #[must_use]
    pub fn with_slide_selector(mut self, selector: impl Into<SlideSelector>) -> Self {
        self.slide_selector = selector.into();
        self
    }

    /// Enables or disables closing after a selection.
    #[must_use]
    pub fn with_close_on_select(mut self, close: bool) -> Self {
        self.close_on_select = close;
        self
    }

    /// Checks the options that cannot be recovered from later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_width.is_finite() && self.list_width > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidListWidth(self.list_width))
        }
    }

    /// Drag bounds for the host's draggable, given the screen size.
    #[must_use]
    pub fn drag_constraint(&self, screen: kurbo::Size) -> DragConstraint {
        DragConstraint::new(self.max_drag, screen)
    }
}
