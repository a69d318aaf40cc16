// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide navigation basics.
//!
//! Walk a `SlideNavigation` through a short session with a printing host:
//! initial selection, a toolbar flick, a rejected branch selection, content
//! selection, and a callback leaf.
//!
//! Run:
//! - `cargo run -p understory_slide_demos --example slide_nav_basics`

use kurbo::Point;
use understory_slide_demos::{PrintingHost, Props};
use understory_slide_nav::{NavItem, SlideNavConfig, SlideNavigation};

const CONFIG: &str = r#"{
    "list_width": 260.0,
    "slide_selector": { "within": "x-toolbar" },
    "defaults": { "layout": "card" }
}"#;

fn props(title: &str) -> Props {
    Props::from([("title".to_string(), title.to_string())])
}

fn finish_slide(nav: &mut SlideNavigation<Props, PrintingHost>) {
    if let Some(t) = nav.host_mut().last_slide.take() {
        let open = nav.on_animation_end(t.generation, t.target_x);
        println!("  (slide finished, open = {open:?})");
    }
}

fn main() {
    let config: SlideNavConfig<Props> = serde_json::from_str(CONFIG).expect("valid config");

    let items = vec![
        NavItem::branch(
            "Inbox",
            vec![
                NavItem::leaf("Today").with_content(props("Today")),
                NavItem::leaf("Archive").with_content(props("Archive")),
            ],
        ),
        NavItem::leaf("Settings")
            .with_content(props("Settings"))
            .with_slide_button("x-toolbar"),
        NavItem::leaf("Log out").with_handler(|| println!("  handler: logging out")),
    ];

    println!("build:");
    let mut nav =
        SlideNavigation::new(config, items, PrintingHost::default()).expect("valid navigation");
    for (row, node) in nav.store().iter().enumerate() {
        println!("  row {row}: {} {:?}", node.title, node.index);
    }

    println!("flick the toolbar right:");
    let toolbar: &[&str] = &["x-button", "x-toolbar", "x-panel"];
    if nav.on_drag_start(toolbar, Point::ZERO, 0) {
        nav.on_drag(Point::new(40.0, 0.0), 16);
        nav.on_drag(Point::new(120.0, 0.0), 32);
        nav.on_drag_end(48);
    }
    finish_slide(&mut nav);

    println!("drag the content body (outside the toolbar):");
    let body: &[&str] = &["x-list", "x-panel"];
    println!("  accepted = {}", nav.on_drag_start(body, Point::ZERO, 100));

    println!("select the \"Inbox\" header:");
    println!("  outcome = {:?}", nav.on_select(0));

    println!("select \"Settings\":");
    println!("  outcome = {:?}", nav.on_select(3));
    finish_slide(&mut nav);

    println!("toggle, then select \"Log out\":");
    nav.toggle(None);
    finish_slide(&mut nav);
    println!("  outcome = {:?}", nav.on_select(4));
    finish_slide(&mut nav);

    println!("tap the \"Inbox\" header:");
    println!("  activation = {:?}", nav.on_item_tap(0));
    println!("  rows = {}", nav.store().iter().count());

    println!("done: current = {:?}, closed = {}", nav.selection().current(), nav.is_closed());
}
