// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental obstacles.
//!
//! Index a decomposition, then drop a new obstacle onto the map and collect
//! the free fragments it swallowed, grouped by the cell they came from.
//!
//! Run:
//! - `cargo run -p rectiline_demos --example free_space_block`

use std::collections::BTreeMap;

use rectiline_cover::{HyperRect, Range};
use rectiline_decompose::{FreeSpace, Raster};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let raster = Raster::parse(&["........", "...#....", "........", "......#."])
        .expect("map is well formed");
    let mut space = FreeSpace::from_raster(&raster);
    println!("{} free cells", space.cells().len());

    let crate_box = HyperRect::xy(Range::new(3, 7), Range::new(2, 4));
    println!("free before: {}", space.is_free(&crate_box));

    let mut by_cell: BTreeMap<usize, i64> = BTreeMap::new();
    for fragment in space.block(&crate_box) {
        *by_cell.entry(fragment.cell).or_default() += fragment.bounds.volume();
    }
    for (cell, area) in &by_cell {
        println!("cell #{cell} {:?} lost {area} units", space.cells()[*cell]);
    }
    println!("free after: {}", space.is_free(&crate_box));
    tracing::info!(touched = by_cell.len(), "blocked");
}
