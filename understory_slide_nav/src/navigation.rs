// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed slide navigation component.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};
use understory_nav_tree::{HierarchicalStore, NavItem, TreeStore, assign_indexes};
use understory_slide_panel::{AncestorQuery, DragConstraint, Generation, SlidePanel, Transition};

use crate::cache::{ContentCache, ContentHost, MergeDefaults, Resolution};
use crate::config::{ConfigError, SlideNavConfig};
use crate::expand::{ExpandAnimation, FadeAnimator, RenderedRows};
use crate::selection::{Activation, SelectOutcome, SelectionController, initial_row};

/// The list widget showing the navigation rows.
///
/// Both calls are programmatic and must not echo back as selection events;
/// [`SlideNavigation`] performs the follow-up itself.
pub trait ListWidget {
    /// Marks `row` as selected.
    fn select_row(&mut self, row: usize);

    /// Clears the selection of `row`.
    fn deselect_row(&mut self, row: usize);
}

/// The draggable panel's presentation.
pub trait PanelHost {
    /// Animates the panel to `transition.target_x`, then reports completion
    /// through [`SlideNavigation::on_animation_end`] with
    /// `transition.generation`.
    ///
    /// A zero-duration transition is already settled; hosts should jump and
    /// need not report completion.
    fn slide_to(&mut self, transition: Transition);

    /// Adds or removes the panel's "open" styling.
    fn set_open_class(&mut self, open: bool);
}

/// Everything [`SlideNavigation`] needs from its host.
pub trait NavHost<C>: ContentHost<C> + ListWidget + PanelHost {}

impl<C, H> NavHost<C> for H where H: ContentHost<C> + ListWidget + PanelHost {}

/// A navigation list behind a sliding content panel.
///
/// Owns the navigation tree, the leaf-only selection, the content cache, and
/// the panel state machine. The host forwards list taps and selections, drag
/// events, and animation completions; effects come back through the
/// [`NavHost`] traits.
pub struct SlideNavigation<C, H: NavHost<C>> {
    config: SlideNavConfig<C>,
    store: TreeStore<C>,
    selection: SelectionController,
    cache: ContentCache<H::View>,
    panel: SlidePanel<String>,
    expand: ExpandAnimation,
    host: H,
    shown_open_class: bool,
}

impl<C, H: NavHost<C>> fmt::Debug for SlideNavigation<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideNavigation")
            .field("rows", &self.store.len())
            .field("selection", &self.selection)
            .field("cached", &self.cache.len())
            .field("panel", &self.panel)
            .finish_non_exhaustive()
    }
}

impl<C: MergeDefaults, H: NavHost<C>> SlideNavigation<C, H> {
    /// Builds the component and performs the initial selection.
    ///
    /// Leaves without an index are numbered first. The first top-level row is
    /// selected if it is a leaf; otherwise it is expanded and its first child is
    /// selected. The initial selection never moves the panel.
    pub fn new(
        config: SlideNavConfig<C>,
        mut items: Vec<NavItem<C>>,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        let counter = assign_indexes(&mut items);
        let store = TreeStore::new(items, config.default_expanded);
        let panel = SlidePanel::new(config.list_width, config.slide_selector.to_region())
            .with_slide_duration(config.slide_duration_ms);

        let mut nav = Self {
            expand: ExpandAnimation::new(config.use_animation),
            config,
            store,
            selection: SelectionController::new(),
            cache: ContentCache::new(),
            panel,
            host,
            shown_open_class: false,
        };
        tracing::debug!(
            rows = nav.store.len(),
            leaves = counter.peek(),
            "slide navigation built"
        );

        if let Some(row) = initial_row(&mut nav.store) {
            nav.host.select_row(row);
            nav.select(row, false);
        }
        if nav.config.start_open {
            let t = nav.panel.open(Some(0));
            nav.apply(t);
        }
        Ok(nav)
    }

    /// Handles a tap on `row`: branches toggle, leaves are left to selection.
    ///
    /// After an expansion, the host should re-render and call
    /// [`on_expand_rendered`](Self::on_expand_rendered).
    pub fn on_item_tap(&mut self, row: usize) -> Activation {
        let activation = self.selection.on_activate(&mut self.store, row);
        tracing::debug!(?activation, "item tap");
        activation
    }

    /// Fades in the children of a branch expanded at `row`.
    ///
    /// Returns the number of fades started; 0 when animation is off.
    pub fn on_expand_rendered<R, A>(&self, rows: &R, animator: &mut A, row: usize) -> usize
    where
        R: RenderedRows + ?Sized,
        A: FadeAnimator<R::Element> + ?Sized,
    {
        self.expand.run(rows, animator, row)
    }

    /// Handles the list's selection moving to `row`.
    ///
    /// Returns `None` if there is no such row. A branch is deselected and the
    /// previous leaf re-selected, without moving the panel.
    pub fn on_select(&mut self, row: usize) -> Option<SelectOutcome> {
        self.select(row, self.config.close_on_select)
    }

    fn select(&mut self, row: usize, close_on_select: bool) -> Option<SelectOutcome> {
        let index = self.store.get_at(row)?.index;
        let outcome = self.selection.on_select(index, close_on_select);
        match outcome {
            SelectOutcome::Revert { to } => {
                self.host.deselect_row(row);
                if let Some(prev) = to.and_then(|i| self.store.row_of_index(i)) {
                    self.host.select_row(prev);
                    self.select(prev, close_on_select);
                }
            }
            SelectOutcome::Show { close, .. } => {
                if let Some(node) = self.store.get_at(row) {
                    let resolution =
                        self.cache
                            .resolve(node, &self.config.defaults, &mut self.host);
                    debug_assert!(!matches!(resolution, Resolution::Skipped));
                }
                if close {
                    let t = self.panel.close(Some(self.config.select_slide_duration_ms));
                    self.apply(t);
                }
            }
        }
        Some(outcome)
    }

    /// Handles a drag start; see [`SlidePanel::on_drag_start`].
    ///
    /// The host answers whether `origin` lies inside the configured slide
    /// selector.
    pub fn on_drag_start<E>(&mut self, origin: &E, offset: Point, now_ms: u64) -> bool
    where
        E: ?Sized,
        H: AncestorQuery<E, String>,
    {
        self.panel.on_drag_start(origin, &self.host, offset, now_ms)
    }

    /// Handles a drag sample; updates the open class when it changes.
    pub fn on_drag(&mut self, raw_offset: Point, now_ms: u64) {
        if self.panel.on_drag(raw_offset, now_ms).is_some() {
            self.sync_open_class();
        }
    }

    /// Handles the end of a drag, measured from tracked samples.
    pub fn on_drag_end(&mut self, now_ms: u64) -> Option<Transition> {
        let t = self.panel.on_drag_end(now_ms)?;
        self.apply(t);
        Some(t)
    }

    /// Handles the end of a drag with host-measured figures.
    pub fn on_drag_end_with(&mut self, delta_x: f64, elapsed_ms: f64) -> Option<Transition> {
        let t = self.panel.on_drag_end_with(delta_x, elapsed_ms)?;
        self.apply(t);
        Some(t)
    }

    /// Handles the host's slide completion; stale generations are ignored.
    pub fn on_animation_end(&mut self, generation: Generation, final_x: f64) -> Option<bool> {
        let open = self.panel.on_animation_end(generation, final_x)?;
        self.sync_open_class();
        Some(open)
    }

    /// Opens a closed panel, closes any other. `None` uses the slide duration.
    pub fn toggle(&mut self, duration_ms: Option<u64>) -> Transition {
        let t = self.panel.toggle(duration_ms);
        self.apply(t);
        t
    }

    /// Slides the panel open.
    pub fn open(&mut self, duration_ms: Option<u64>) -> Transition {
        let t = self.panel.open(duration_ms);
        self.apply(t);
        t
    }

    /// Slides the panel closed.
    pub fn close(&mut self, duration_ms: Option<u64>) -> Transition {
        let t = self.panel.close(duration_ms);
        self.apply(t);
        t
    }

    /// Returns `true` if the panel is (or is heading) closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.panel.is_closed()
    }

    /// Bounds for the host's draggable behavior.
    #[must_use]
    pub fn drag_constraint(&self, screen: Size) -> DragConstraint {
        self.config.drag_constraint(screen)
    }

    /// The navigation rows.
    #[must_use]
    pub fn store(&self) -> &TreeStore<C> {
        &self.store
    }

    /// The selection controller.
    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Content resolved so far.
    #[must_use]
    pub fn cache(&self) -> &ContentCache<H::View> {
        &self.cache
    }

    /// The panel state machine.
    #[must_use]
    pub fn panel(&self) -> &SlidePanel<String> {
        &self.panel
    }

    /// The options this component was built with.
    #[must_use]
    pub fn config(&self) -> &SlideNavConfig<C> {
        &self.config
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn apply(&mut self, transition: Transition) {
        self.host.slide_to(transition);
        self.sync_open_class();
    }

    fn sync_open_class(&mut self) {
        let open = self.panel.is_open_class();
        if open != self.shown_open_class {
            self.shown_open_class = open;
            self.host.set_open_class(open);
        }
    }
}
