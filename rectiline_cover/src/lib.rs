// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rectiline_cover --heading-base-level=0

//! Rectiline Cover: a D-dimensional coverage tree over integer boxes.
//!
//! A [`CoverageTree`] stores values on axis-aligned hyperrectangles of a fixed
//! integer domain and answers one question quickly: does this box touch
//! anything stored?
//!
//! - Insert a box with a payload; each axis is split into canonical segment-tree
//!   nodes, so an insert touches O((log n)^D) nodes.
//! - Check whether a box intersects any stored box.
//! - Remove everything inside a box. Stored boxes that stick out of the removed
//!   region are split, so the part outside keeps its value, and every cleared
//!   piece is handed back with its node address.
//!
//! The domain is `[0, capacity)` on every axis, with each capacity rounded up
//! to a power of two. Boxes are half-open [`Range`]s per axis; an empty range
//! makes a box degenerate and every operation treats it as a no-op.
//!
//! # Example
//!
//! ```rust
//! use rectiline_cover::{CoverageTree, HyperRect, Range};
//!
//! let mut tree: CoverageTree<&str, 2> = CoverageTree::new([16, 16]);
//! let room = HyperRect::xy(Range::new(2, 10), Range::new(2, 6));
//! tree.insert(&room, "room");
//! assert!(tree.check(&HyperRect::xy(Range::new(9, 12), Range::new(0, 3))));
//!
//! // Cut a doorway out of the room and collect the pieces that were cleared.
//! let door = HyperRect::xy(Range::new(4, 6), Range::new(0, 16));
//! let pieces = tree.remove_collect(&door);
//! let area: i64 = pieces
//!     .iter()
//!     .map(|(index, _)| tree.box_for_index(*index).volume())
//!     .sum();
//! assert_eq!(area, 8);
//! assert!(!tree.check(&door));
//! assert_eq!(tree.lookup([3, 3]), Some(&"room"));
//! ```
//!
//! Node addresses reported by the remove visitor are one implicit-heap index
//! per axis; [`CoverageTree::box_for_index`] turns them back into boxes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;
pub mod mask;
pub mod tree;
pub mod types;

pub use layout::{HeapLayout, Segment, to_pow2};
pub use mask::{Axes, CoverageBits, MAX_AXES};
pub use tree::CoverageTree;
pub use types::{HyperRect, NodeIndex, Range};
