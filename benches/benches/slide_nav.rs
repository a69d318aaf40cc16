// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_slide_nav::{
    ContentHost, ListWidget, NavItem, PanelHost, SlideNavConfig, SlideNavigation, Transition,
};

/// Host that only counts views.
#[derive(Default)]
struct NullHost {
    views: usize,
}

impl ContentHost<()> for NullHost {
    type View = usize;

    fn instantiate(&mut self, _: &()) -> usize {
        self.views += 1;
        self.views
    }

    fn set_active_view(&mut self, view: &usize) {
        black_box(view);
    }
}

impl ListWidget for NullHost {
    fn select_row(&mut self, row: usize) {
        black_box(row);
    }

    fn deselect_row(&mut self, row: usize) {
        black_box(row);
    }
}

impl PanelHost for NullHost {
    fn slide_to(&mut self, transition: Transition) {
        black_box(transition);
    }

    fn set_open_class(&mut self, open: bool) {
        black_box(open);
    }
}

fn items(branches: usize, leaves: usize) -> Vec<NavItem> {
    (0..branches)
        .map(|b| {
            let children = (0..leaves).map(|l| NavItem::leaf(format!("{b}.{l}"))).collect();
            NavItem::branch(format!("{b}"), children)
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_nav/select");

    for branches in [4usize, 32] {
        let config = SlideNavConfig {
            default_expanded: true,
            ..SlideNavConfig::default()
        };
        let mut nav = SlideNavigation::new(config, items(branches, 8), NullHost::default())
            .expect("non-empty items");
        let rows = nav.store().roots().len() * 9;

        // Alternating between every row mixes cached views with branch reverts.
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let mut row = 0;
            b.iter(|| {
                black_box(nav.on_select(row));
                row = (row + 1) % rows;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
