// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rectiline_decompose --heading-base-level=0

//! Rectiline Decompose: free space of rectilinear obstacle maps as rectangles.
//!
//! Obstacle maps are described by their boundary edges: flat boxes tagged
//! with the [`Facing`] that points from the solid side into free space.
//! [`decompose_free_space`] sweeps those edges and returns rectangles that
//! tile the free area exactly, each spanning a maximal horizontal run at the
//! sweep position where it started.
//!
//! - [`Raster`] turns an ASCII grid of `#` and `.` into obstacle edges.
//! - [`FreeSpace`] indexes a decomposition in a
//!   [`CoverageTree`](rectiline_cover::CoverageTree), answering point and box
//!   queries and reporting the lost pieces when a rectangle becomes solid.
//! - [`geometry`] converts cells to Kurbo rectangles for drawing and hit
//!   testing.
//!
//! # Example
//!
//! ```rust
//! use rectiline_cover::{HyperRect, Range};
//! use rectiline_decompose::{Raster, decompose_free_space};
//!
//! let raster = Raster::parse(&[".#", ".."]).unwrap();
//! let cells = decompose_free_space(&raster.obstacles());
//! assert_eq!(
//!     cells,
//!     [
//!         HyperRect::xy(Range::new(1, 2), Range::new(1, 2)),
//!         HyperRect::xy(Range::new(1, 3), Range::new(2, 3)),
//!     ]
//! );
//! ```
//!
//! Only two dimensions are decomposed; for any other dimension
//! [`decompose_free_space`] returns no cells.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo, `tracing` and `thiserror`.
//! - `libm`: Kurbo float math without `std`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod free_space;
pub mod geometry;
pub mod obstacle;
pub mod raster;
pub mod sweep;

pub use error::{RasterError, RasterResult};
pub use free_space::{FreeSpace, Fragment};
pub use geometry::{bounding_rect, locate, to_rect};
pub use obstacle::{Facing, Obstacle, ObstacleSet};
pub use raster::Raster;
pub use sweep::{Decomposition, decompose_free_space};
