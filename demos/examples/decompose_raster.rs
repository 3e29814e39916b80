// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raster decomposition.
//!
//! Parse an ASCII map, sweep it into free rectangles, and hit-test a point in
//! float coordinates.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p rectiline_demos --example decompose_raster`

use kurbo::Point;
use rectiline_decompose::{Raster, bounding_rect, decompose_free_space, locate, to_rect};

const MAP: [&str; 6] = [
    "..........",
    "..##......",
    "..##..#...",
    "......#...",
    "#.....#..#",
    "..........",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raster = match Raster::parse(&MAP) {
        Ok(raster) => raster,
        Err(err) => {
            eprintln!("bad map: {err}");
            return;
        }
    };
    let obstacles = raster.obstacles();
    let cells = decompose_free_space(&obstacles);
    println!("{} edges -> {} cells", obstacles.len(), cells.len());
    for (i, cell) in cells.iter().enumerate() {
        println!("  #{i}: {cell:?} -> {:?}", to_rect(cell));
    }

    let free: i64 = cells.iter().map(|c| c.volume()).sum();
    assert_eq!(free as usize, raster.free_cells().len());
    println!("bounds: {:?}", bounding_rect(&cells));

    let point = Point::new(5.5, 3.25);
    match locate(&cells, point) {
        Some(i) => println!("{point:?} is in cell #{i}"),
        None => println!("{point:?} is solid"),
    }
}
