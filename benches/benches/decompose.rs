// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rectiline_benches::Rng;
use rectiline_cover::{HyperRect, Range};
use rectiline_decompose::{FreeSpace, Raster, decompose_free_space};

/// A `side × side` map with roughly one solid cell in `one_in`.
fn gen_raster(side: usize, one_in: u64, seed: u64) -> Raster {
    let mut rng = Rng::new(seed);
    let rows: Vec<String> = (0..side)
        .map(|_| {
            (0..side)
                .map(|_| if rng.next_u64() % one_in == 0 { '#' } else { '.' })
                .collect()
        })
        .collect();
    Raster::parse(&rows).unwrap()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for side in [32_usize, 128, 512] {
        let obstacles = gen_raster(side, 5, 42).obstacles();
        group.throughput(Throughput::Elements(obstacles.len() as u64));
        group.bench_function(format!("random_raster_side{side}"), |b| {
            b.iter(|| black_box(decompose_free_space(&obstacles)));
        });
    }
    group.finish();
}

fn bench_free_space(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_space");
    let raster = gen_raster(128, 6, 17);
    group.bench_function("build_side128", |b| {
        b.iter(|| black_box(FreeSpace::from_raster(&raster)));
    });
    let space = FreeSpace::from_raster(&raster);
    group.bench_function("block_stripes_side128", |b| {
        b.iter_batched(
            || space.clone(),
            |mut space| {
                let mut lost = 0;
                for i in (0..128).step_by(8) {
                    let stripe = HyperRect::xy(Range::new(i, i + 2), Range::new(0, 130));
                    lost += space.block(&stripe).len();
                }
                black_box(lost);
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_free_space);
criterion_main!(benches);
