// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_nav_tree::{HierarchicalStore, LeafIndex, NavItem, TreeStore, assign_indexes};

/// `branches` top-level branches with `leaves` leaves each.
fn forest(branches: usize, leaves: usize) -> Vec<NavItem> {
    (0..branches)
        .map(|b| {
            let children = (0..leaves)
                .map(|l| NavItem::leaf(format!("item {b}.{l}")))
                .collect();
            NavItem::branch(format!("section {b}"), children)
        })
        .collect()
}

fn bench_assign_indexes(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_tree/assign_indexes");

    for (branches, leaves) in [(8usize, 8usize), (32, 32), (128, 64)] {
        let total = branches * leaves;
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(total),
            &(branches, leaves),
            |b, &(branches, leaves)| {
                b.iter_batched(
                    || forest(branches, leaves),
                    |mut items| {
                        black_box(assign_indexes(&mut items));
                        items
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_tree/store");

    for branches in [16usize, 128] {
        let mut items = forest(branches, 16);
        assign_indexes(&mut items);
        let collapsed = TreeStore::new(items.clone(), false);
        let expanded = TreeStore::new(items, true);

        // Toggling the middle branch rebuilds every visible row.
        let middle = branches / 2;
        group.bench_with_input(
            BenchmarkId::new("expand_collapse", branches),
            &collapsed,
            |b, store| {
                b.iter_batched(
                    || store.clone(),
                    |mut store| {
                        store.expand(middle);
                        store.collapse(middle);
                        store
                    },
                    BatchSize::LargeInput,
                );
            },
        );

        let last = LeafIndex(u32::try_from(branches * 16 - 1).unwrap());
        group.bench_with_input(
            BenchmarkId::new("row_of_index_last", branches),
            &expanded,
            |b, store| b.iter(|| black_box(store.row_of_index(black_box(last)))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_assign_indexes, bench_store);
criterion_main!(benches);
