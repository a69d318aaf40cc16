// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_slide_nav` crate.
//!
//! These drive `SlideNavigation` through a recording host and check the
//! effects it requests: list selection, view activation, panel slides, and the
//! open class.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_slide_nav::{
    Activation, AncestorQuery, ConfigError, ContentHost, FadeAnimator, HierarchicalStore,
    LeafIndex, ListWidget, NavItem, PanelHost, RenderedRows, SelectOutcome, SlideNavConfig,
    SlideNavigation, SlideSelector, Transition,
};

type Content = BTreeMap<&'static str, &'static str>;

#[derive(Debug, PartialEq)]
enum ListCall {
    Select(usize),
    Deselect(usize),
}

/// Records every effect the component asks for.
#[derive(Default)]
struct Host {
    built: Vec<Content>,
    active: Option<usize>,
    buttons: Vec<(usize, String)>,
    list: Vec<ListCall>,
    slides: Vec<Transition>,
    open_class: Vec<bool>,
}

impl ContentHost<Content> for Host {
    type View = usize;

    fn instantiate(&mut self, config: &Content) -> usize {
        self.built.push(config.clone());
        self.built.len() - 1
    }

    fn set_active_view(&mut self, view: &usize) {
        self.active = Some(*view);
    }

    fn attach_slide_button(&mut self, view: &usize, selector: &str) {
        self.buttons.push((*view, selector.into()));
    }
}

impl ListWidget for Host {
    fn select_row(&mut self, row: usize) {
        self.list.push(ListCall::Select(row));
    }

    fn deselect_row(&mut self, row: usize) {
        self.list.push(ListCall::Deselect(row));
    }
}

impl PanelHost for Host {
    fn slide_to(&mut self, transition: Transition) {
        self.slides.push(transition);
    }

    fn set_open_class(&mut self, open: bool) {
        self.open_class.push(open);
    }
}

/// Elements are given as their class chain, innermost first.
impl AncestorQuery<[&'static str], String> for Host {
    fn matches_ancestor(&self, element: &[&'static str], class: &String) -> bool {
        element.iter().any(|c| *c == class.as_str())
    }
}

fn titled(title: &'static str) -> NavItem<Content> {
    NavItem::leaf(title).with_content(Content::from([("title", title)]))
}

/// `[A[A1, A2], B]`
fn items() -> Vec<NavItem<Content>> {
    vec![
        NavItem::branch("A", vec![titled("A1"), titled("A2")]),
        titled("B"),
    ]
}

fn build(config: SlideNavConfig<Content>) -> SlideNavigation<Content, Host> {
    SlideNavigation::new(config, items(), Host::default()).unwrap()
}

fn open_settled(nav: &mut SlideNavigation<Content, Host>) {
    let t = nav.open(None);
    assert_eq!(nav.on_animation_end(t.generation, t.target_x), Some(true));
}

#[test]
fn leaves_are_numbered_in_preorder() {
    let nav = build(SlideNavConfig::default());
    let store = nav.store();
    let indexes: Vec<_> = store.iter().map(|n| (n.title.as_str(), n.index)).collect();
    assert_eq!(
        indexes,
        [
            ("A", None),
            ("A1", Some(LeafIndex(0))),
            ("A2", Some(LeafIndex(1))),
            ("B", Some(LeafIndex(2))),
        ]
    );
}

#[test]
fn init_expands_a_leading_branch_and_selects_its_first_leaf() {
    let nav = build(SlideNavConfig::default());
    assert_eq!(nav.selection().current(), Some(LeafIndex(0)));
    assert_eq!(nav.host().list, [ListCall::Select(1)]);
    assert_eq!(nav.host().active, Some(0));
    assert_eq!(nav.host().built, [Content::from([("title", "A1")])]);
    // The initial selection never moves the panel.
    assert!(nav.host().slides.is_empty());
    assert!(nav.is_closed());
}

#[test]
fn init_selects_a_leading_leaf_directly() {
    let items = vec![titled("Home"), NavItem::branch("More", vec![titled("About")])];
    let nav = SlideNavigation::new(SlideNavConfig::default(), items, Host::default()).unwrap();
    assert_eq!(nav.host().list, [ListCall::Select(0)]);
    assert_eq!(nav.store().len(), 2);
}

#[test]
fn default_expanded_shows_every_branch() {
    let config = SlideNavConfig {
        default_expanded: true,
        ..SlideNavConfig::default()
    };
    let items = vec![
        NavItem::branch("A", vec![titled("A1")]),
        NavItem::branch("B", vec![titled("B1")]),
    ];
    let nav = SlideNavigation::new(config, items, Host::default()).unwrap();
    assert_eq!(nav.store().len(), 4);
    assert_eq!(nav.host().list, [ListCall::Select(1)]);
}

#[test]
fn branch_selection_reverts_and_skips_one_close() {
    let mut nav = build(SlideNavConfig::default());
    open_settled(&mut nav);
    let slides_before = nav.host().slides.len();

    assert_eq!(
        nav.on_select(0),
        Some(SelectOutcome::Revert {
            to: Some(LeafIndex(0))
        })
    );
    assert_eq!(
        nav.host().list,
        [ListCall::Select(1), ListCall::Deselect(0), ListCall::Select(1)]
    );
    assert_eq!(nav.selection().current(), Some(LeafIndex(0)));
    // The restored leaf re-showed its view but the panel stayed open.
    assert_eq!(nav.host().slides.len(), slides_before);
    assert!(!nav.is_closed());
    assert!(!nav.selection().state().close_suppressed);
    assert_eq!(nav.host().built.len(), 1);

    // The next real selection closes with the select duration.
    assert_eq!(
        nav.on_select(3),
        Some(SelectOutcome::Show {
            index: LeafIndex(2),
            close: true
        })
    );
    let last = nav.host().slides.last().copied().unwrap();
    assert_eq!((last.target_x, last.duration_ms), (0.0, 300));
}

#[test]
fn current_never_points_at_a_branch() {
    let mut nav = build(SlideNavConfig::default());
    for row in [0, 3, 0, 2, 0, 1, 3, 0] {
        nav.on_select(row);
        let current = nav.selection().current().unwrap();
        let shown = nav.store().row_of_index(current).unwrap();
        assert!(nav.store().get_at(shown).unwrap().is_leaf());
    }
    assert_eq!(nav.on_select(42), None);
}

#[test]
fn views_are_built_once_and_reactivated() {
    let mut nav = build(SlideNavConfig::default().with_close_on_select(false));
    nav.on_select(3);
    assert_eq!(nav.host().active, Some(1));
    nav.on_select(1);
    assert_eq!(nav.host().active, Some(0));
    nav.on_select(3);
    assert_eq!(nav.host().active, Some(1));
    assert_eq!(nav.host().built.len(), 2);
    assert_eq!(nav.cache().len(), 2);
    assert!(nav.host().slides.is_empty());
}

#[test]
fn callback_leaves_run_every_time_and_keep_the_view() {
    let hits = Rc::new(Cell::new(0));
    let logout = {
        let hits = hits.clone();
        NavItem::leaf("Log out").with_handler(move || hits.set(hits.get() + 1))
    };
    let items = vec![titled("Home"), logout];
    let config = SlideNavConfig::default().with_close_on_select(false);
    let mut nav = SlideNavigation::new(config, items, Host::default()).unwrap();

    nav.on_select(1);
    nav.on_select(1);
    assert_eq!(hits.get(), 2);
    assert_eq!(nav.host().active, Some(0));
    assert_eq!(nav.host().built.len(), 1);
}

#[test]
fn defaults_are_merged_under_leaf_content() {
    let config = SlideNavConfig::default()
        .with_defaults(Content::from([("layout", "card"), ("title", "Untitled")]));
    let nav = build(config);
    assert_eq!(
        nav.host().built,
        [Content::from([("layout", "card"), ("title", "A1")])]
    );
}

#[test]
fn slide_button_is_attached_to_the_new_view() {
    let items = vec![titled("Home").with_slide_button("x-toolbar")];
    let mut nav = SlideNavigation::new(SlideNavConfig::default(), items, Host::default()).unwrap();
    assert_eq!(nav.host().buttons, [(0, String::from("x-toolbar"))]);

    // The host routes the button's release here.
    let t = nav.toggle(None);
    assert!(t.opens());
}

#[test]
fn toggle_flips_and_completion_settles_the_class() {
    let mut nav = build(SlideNavConfig::default());

    let t = nav.toggle(None);
    assert_eq!((t.target_x, t.duration_ms), (250.0, 100));
    // Opening shows the class right away.
    assert_eq!(nav.host().open_class, [true]);
    assert_eq!(nav.on_animation_end(t.generation, t.target_x), Some(true));

    let t = nav.toggle(None);
    assert_eq!(t.target_x, 0.0);
    assert_eq!(nav.host().open_class, [true]);
    assert_eq!(nav.on_animation_end(t.generation, 0.0), Some(false));
    assert_eq!(nav.host().open_class, [true, false]);
    assert!(nav.is_closed());
}

#[test]
fn stale_completion_is_ignored() {
    let mut nav = build(SlideNavConfig::default());
    let opening = nav.open(None);
    let closing = nav.close(None);
    assert_eq!(nav.on_animation_end(opening.generation, 250.0), None);
    assert_eq!(nav.host().open_class, [true]);
    assert_eq!(nav.on_animation_end(closing.generation, 0.0), Some(false));
    assert_eq!(nav.host().open_class, [true, false]);
}

#[test]
fn a_completion_is_applied_once() {
    let mut nav = build(SlideNavConfig::default());
    let t = nav.toggle(None);
    assert_eq!(nav.on_animation_end(t.generation, t.target_x), Some(true));
    assert_eq!(nav.on_animation_end(t.generation, 0.0), None);
    assert!(!nav.is_closed());
    assert_eq!(nav.host().open_class, [true]);
}

#[test]
fn flick_inside_the_slide_selector_opens() {
    let mut nav = build(SlideNavConfig::default().with_slide_selector("x-toolbar"));

    let body: &[&str] = &["x-list", "x-panel"];
    let toolbar: &[&str] = &["x-button", "x-toolbar", "x-panel"];
    assert!(!nav.on_drag_start(body, Point::ZERO, 0));
    assert!(nav.on_drag_end(10).is_none());

    assert!(nav.on_drag_start(toolbar, Point::ZERO, 1_000));
    nav.on_drag(Point::new(30.0, 0.0), 1_000);
    assert_eq!(nav.host().open_class, [true]);
    let t = nav.on_drag_end(1_020).unwrap();
    assert_eq!((t.target_x, t.duration_ms), (250.0, 100));
    assert_eq!(nav.host().slides, [t]);
}

#[test]
fn slow_short_drag_snaps_back() {
    let mut nav = build(SlideNavConfig::default());
    let anywhere: &[&str] = &[];
    assert!(nav.on_drag_start(anywhere, Point::ZERO, 0));
    nav.on_drag(Point::new(100.0, 0.0), 0);
    nav.on_drag(Point::new(120.0, 0.0), 50);
    let t = nav.on_drag_end(2_000).unwrap();
    assert_eq!(t.target_x, 0.0);
    assert_eq!(nav.on_animation_end(t.generation, 0.0), Some(false));
    assert_eq!(nav.host().open_class, [true, false]);
}

#[test]
fn disabled_selector_never_drags() {
    let config = SlideNavConfig {
        slide_selector: SlideSelector::Disabled,
        ..SlideNavConfig::default()
    };
    let mut nav = build(config);
    let anywhere: &[&str] = &[];
    assert!(!nav.on_drag_start(anywhere, Point::ZERO, 0));
    assert!(nav.toggle(None).opens());
}

#[test]
fn without_animation_everything_settles_at_once() {
    let mut nav = build(SlideNavConfig::default().without_animation());
    let t = nav.toggle(None);
    assert_eq!(t.duration_ms, 0);
    assert!(nav.panel().is_settled());
    assert!(nav.panel().committed_open());

    nav.on_select(3);
    let last = nav.host().slides.last().copied().unwrap();
    assert_eq!((last.target_x, last.duration_ms), (0.0, 0));
    assert!(nav.is_closed());
    assert_eq!(nav.host().open_class, [true, false]);
}

#[test]
fn start_open_reveals_the_list_without_animating() {
    let config = SlideNavConfig {
        start_open: true,
        ..SlideNavConfig::default()
    };
    let nav = build(config);
    assert_eq!(nav.host().slides.len(), 1);
    assert_eq!(nav.host().slides[0].duration_ms, 0);
    assert_eq!(nav.host().open_class, [true]);
    assert!(!nav.is_closed());
    assert_eq!(nav.selection().current(), Some(LeafIndex(0)));
}

/// Rendered rows as `(selected header, content element)`.
struct Rendered(Vec<(bool, Option<&'static str>)>);

impl RenderedRows for Rendered {
    type Element = &'static str;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn is_selected_header(&self, row: usize) -> bool {
        self.0[row].0
    }

    fn content_element(&self, row: usize) -> Option<&'static str> {
        self.0[row].1
    }
}

#[derive(Default)]
struct Fades(Vec<(&'static str, u64)>);

impl FadeAnimator<&'static str> for Fades {
    fn fade_in(&mut self, element: &'static str, delay_ms: u64) {
        self.0.push((element, delay_ms));
    }
}

#[test]
fn expanding_a_branch_fades_its_children_in() {
    let mut nav = build(SlideNavConfig::default());
    assert_eq!(nav.on_item_tap(3), Activation::Leaf(3));
    assert_eq!(nav.on_item_tap(0), Activation::Collapsed(0));
    assert_eq!(nav.store().len(), 2);
    assert_eq!(nav.on_item_tap(0), Activation::Expanded(0));
    assert_eq!(nav.store().len(), 4);
    // Taps never change the selection.
    assert_eq!(nav.selection().current(), Some(LeafIndex(0)));

    let rows = Rendered(vec![
        (true, None),
        (false, Some("A1")),
        (false, Some("A2")),
        (false, None),
    ]);
    let mut fades = Fades::default();
    assert_eq!(nav.on_expand_rendered(&rows, &mut fades, 0), 2);
    assert_eq!(fades.0, [("A1", 150), ("A2", 300)]);
}

#[test]
fn expand_fade_is_off_without_animation() {
    let config = SlideNavConfig {
        use_animation: false,
        ..SlideNavConfig::default()
    };
    let nav = build(config);
    let rows = Rendered(vec![(true, None), (false, Some("A1"))]);
    let mut fades = Fades::default();
    assert_eq!(nav.on_expand_rendered(&rows, &mut fades, 0), 0);
    assert!(fades.0.is_empty());
}

#[test]
fn construction_errors() {
    let empty =
        SlideNavigation::<Content, Host>::new(SlideNavConfig::default(), Vec::new(), Host::default());
    assert_eq!(empty.err(), Some(ConfigError::NoItems));

    let narrow = SlideNavigation::new(
        SlideNavConfig::default().with_list_width(0.0),
        items(),
        Host::default(),
    );
    assert_eq!(narrow.err(), Some(ConfigError::InvalidListWidth(0.0)));
    assert!(
        ConfigError::NoItems
            .to_string()
            .contains("at least one top-level item")
    );
}

#[test]
fn drag_constraint_uses_the_larger_screen_side() {
    let nav = build(SlideNavConfig::default());
    let c = nav.drag_constraint(Size::new(375.0, 812.0));
    assert_eq!((c.min, c.max), (Point::ZERO, Point::new(812.0, 0.0)));

    let nav = build(SlideNavConfig {
        max_drag: Some(250.0),
        ..SlideNavConfig::default()
    });
    assert_eq!(nav.drag_constraint(Size::new(375.0, 812.0)).max.x, 250.0);
}
