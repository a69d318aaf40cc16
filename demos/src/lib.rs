// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the slide navigation demos.
//!
//! [`PrintingHost`] stands in for a real UI toolkit: every effect the
//! navigation requests is printed instead of rendered.

use std::collections::BTreeMap;

use understory_slide_nav::{AncestorQuery, ContentHost, ListWidget, PanelHost, Transition};

/// Content descriptor used by the demos: string properties such as `title`.
pub type Props = BTreeMap<String, String>;

/// A host that prints what it is asked to do.
#[derive(Debug, Default)]
pub struct PrintingHost {
    views: Vec<Props>,
    /// Latest panel transition, for the demo to "finish" animating.
    pub last_slide: Option<Transition>,
}

impl PrintingHost {
    /// Title of view `view`, or `"?"`.
    pub fn title(&self, view: usize) -> &str {
        self.views
            .get(view)
            .and_then(|p| p.get("title"))
            .map_or("?", String::as_str)
    }
}

impl ContentHost<Props> for PrintingHost {
    type View = usize;

    fn instantiate(&mut self, config: &Props) -> usize {
        self.views.push(config.clone());
        let view = self.views.len() - 1;
        println!("  content: built view {view} from {config:?}");
        view
    }

    fn set_active_view(&mut self, view: &usize) {
        println!("  content: showing view {view} ({})", self.title(*view));
    }

    fn attach_slide_button(&mut self, view: &usize, selector: &str) {
        println!("  content: toggle button added to view {view} at `{selector}`");
    }
}

impl ListWidget for PrintingHost {
    fn select_row(&mut self, row: usize) {
        println!("  list: select row {row}");
    }

    fn deselect_row(&mut self, row: usize) {
        println!("  list: deselect row {row}");
    }
}

impl PanelHost for PrintingHost {
    fn slide_to(&mut self, transition: Transition) {
        println!(
            "  panel: slide to x={} over {} ms",
            transition.target_x, transition.duration_ms
        );
        self.last_slide = Some(transition);
    }

    fn set_open_class(&mut self, open: bool) {
        println!("  panel: open class {}", if open { "on" } else { "off" });
    }
}

/// Drag origins are class chains, innermost first.
impl AncestorQuery<[&str], String> for PrintingHost {
    fn matches_ancestor(&self, element: &[&str], class: &String) -> bool {
        element.iter().any(|c| *c == class.as_str())
    }
}
