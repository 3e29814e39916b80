// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage tree basics.
//!
//! Insert two rooms, punch a corridor through one, and list what the corridor
//! removed.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p rectiline_demos --example coverage_basics`

use rectiline_cover::{CoverageTree, HyperRect, Range};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree: CoverageTree<&str, 2> = CoverageTree::new([20, 12]);
    println!("tree: {tree:?}");

    let kitchen = HyperRect::xy(Range::new(1, 9), Range::new(1, 6));
    let hall = HyperRect::xy(Range::new(10, 18), Range::new(2, 10));
    tree.insert(&kitchen, "kitchen");
    tree.insert(&hall, "hall");

    let gap = HyperRect::xy(Range::new(9, 10), Range::new(0, 12));
    assert!(!tree.check(&gap), "nothing stored between the rooms");

    // A corridor through the kitchen keeps the rest of the room.
    let corridor = HyperRect::xy(Range::new(4, 6), Range::new(0, 12));
    tree.remove_with(&corridor, |index, value| {
        println!("removed {value} piece at {index:?}");
    });
    assert!(!tree.check(&corridor));
    assert_eq!(tree.lookup([2, 3]), Some(&"kitchen"));
    assert_eq!(tree.lookup([7, 3]), Some(&"kitchen"));
    assert_eq!(tree.lookup([12, 8]), Some(&"hall"));
    println!("after corridor: {tree:?}");
}
