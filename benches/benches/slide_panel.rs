// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_slide_panel::{DragRegion, SlidePanel};

fn anywhere(_: &u32, _: &&str) -> bool {
    true
}

/// One full gesture: start, `samples` drag events 16 ms apart, end, completion.
fn gesture(panel: &mut SlidePanel<&'static str>, samples: u32) {
    let origin = 0_u32;
    panel.on_drag_start(&origin, &anywhere, Point::ZERO, 0);
    for i in 1..=samples {
        let x = f64::from(i) * 4.0;
        black_box(panel.on_drag(Point::new(x, 0.0), u64::from(i) * 16));
    }
    if let Some(t) = panel.on_drag_end(u64::from(samples) * 16 + 16) {
        black_box(panel.on_animation_end(t.generation, t.target_x));
    }
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_panel/gesture");

    // Sample counts cover a quick flick up to a slow, deliberate drag.
    for samples in [4_u32, 60, 600] {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            &samples,
            |b, &samples| {
                let mut panel = SlidePanel::new(250.0, DragRegion::Anywhere);
                b.iter(|| gesture(&mut panel, samples));
            },
        );
    }

    group.finish();
}

fn bench_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_panel/drag_start");

    let chain: Vec<&'static str> = (0..32).map(|_| "x-inner").chain(["x-toolbar"]).collect();
    let query = |chain: &Vec<&'static str>, class: &&'static str| chain.iter().any(|c| c == class);

    group.bench_function("within_deep_chain", |b| {
        let mut panel = SlidePanel::new(250.0, DragRegion::Within("x-toolbar"));
        b.iter(|| black_box(panel.on_drag_start(&chain, &query, Point::ZERO, 0)));
    });

    group.finish();
}

criterion_group!(benches, bench_gesture, bench_region);
criterion_main!(benches);
