// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rectiline_benches::Rng;
use rectiline_cover::{CoverageTree, HyperRect, Range};

fn gen_random_boxes(side: i64, count: usize, max_extent: i64, seed: u64) -> Vec<HyperRect<2>> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.below(side);
        let y = rng.below(side);
        let w = 1 + rng.below(max_extent);
        let h = 1 + rng.below(max_extent);
        out.push(HyperRect::xy(Range::new(x, x + w), Range::new(y, y + h)));
    }
    out
}

fn filled(side: usize, boxes: &[HyperRect<2>]) -> CoverageTree<u32, 2> {
    let mut tree = CoverageTree::new([side, side]);
    for (i, b) in boxes.iter().enumerate() {
        tree.insert(b, i as u32);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for side in [64_usize, 256, 1024] {
        let boxes = gen_random_boxes(side as i64, 1000, side as i64 / 8, 0xC0FFEE);
        group.throughput(Throughput::Elements(boxes.len() as u64));
        group.bench_function(format!("random_side{side}"), |b| {
            b.iter_batched(
                || CoverageTree::<u32, 2>::new([side, side]),
                |mut tree| {
                    for (i, r) in boxes.iter().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    black_box(tree);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");
    for side in [64_usize, 256, 1024] {
        let tree = filled(side, &gen_random_boxes(side as i64, 500, side as i64 / 16, 7));
        let queries = gen_random_boxes(side as i64, 1000, side as i64 / 32, 11);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("random_side{side}"), |b| {
            b.iter(|| {
                let hits = queries.iter().filter(|p| tree.check(p)).count();
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for side in [64_usize, 256] {
        let tree = filled(side, &gen_random_boxes(side as i64, 500, side as i64 / 8, 3));
        let holes = gen_random_boxes(side as i64, 100, side as i64 / 16, 5);
        group.throughput(Throughput::Elements(holes.len() as u64));
        group.bench_function(format!("collect_side{side}"), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    let mut pieces = 0;
                    for h in &holes {
                        tree.remove_with(h, |_, _| pieces += 1);
                    }
                    black_box(pieces);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_three_axes(c: &mut Criterion) {
    let mut group = c.benchmark_group("three_axes");
    let mut rng = Rng::new(99);
    let boxes: Vec<HyperRect<3>> = (0..300)
        .map(|_| {
            HyperRect::from_fn(|_| {
                let from = rng.below(32);
                Range::new(from, from + 1 + rng.below(8))
            })
        })
        .collect();
    group.throughput(Throughput::Elements(boxes.len() as u64));
    group.bench_function("insert_check_side32", |b| {
        b.iter_batched(
            || CoverageTree::<u32, 3>::new([32, 32, 32]),
            |mut tree| {
                for (i, r) in boxes.iter().enumerate() {
                    if !tree.check(r) {
                        tree.insert(r, i as u32);
                    }
                }
                black_box(tree);
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_check,
    bench_remove,
    bench_three_axes
);
criterion_main!(benches);
