// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A decomposition indexed in a coverage tree.

use alloc::vec::Vec;

use rectiline_cover::{CoverageTree, HyperRect, Range};
use tracing::debug;

use crate::obstacle::Obstacle;
use crate::raster::Raster;
use crate::sweep::{Decomposition, decompose_free_space};

/// Piece of a free cell cleared by [`FreeSpace::block`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    /// Index of the cell in [`FreeSpace::cells`].
    pub cell: usize,
    /// The cleared box, inside both the cell and the blocked rectangle.
    pub bounds: HyperRect<2>,
}

/// Free cells of an obstacle map, with point and box queries.
///
/// Blocking a rectangle removes it from the index and reports the pieces of
/// each cell that were lost, which a planner can re-decompose or simply drop
/// from its adjacency graph.
///
/// Cells may sit anywhere in the `i64` plane. The index is anchored at the
/// lowest cell corner, and every query is translated into it.
#[derive(Clone, Debug)]
pub struct FreeSpace {
    cells: Decomposition<2>,
    origin: [i64; 2],
    index: CoverageTree<usize, 2>,
}

impl FreeSpace {
    /// Decompose `obstacles` and index every resulting cell.
    ///
    /// # Panics
    ///
    /// Panics if the obstacles do not enclose the free area (see
    /// [`decompose_free_space`]).
    pub fn new(obstacles: &[Obstacle<2>]) -> Self {
        let cells = decompose_free_space(obstacles);
        let origin: [i64; 2] = core::array::from_fn(|axis| {
            cells.iter().map(|c| c[axis].from).min().unwrap_or(0)
        });
        let mut extent = [1_usize; 2];
        for cell in &cells {
            for (axis, reach) in extent.iter_mut().enumerate() {
                let span = cell[axis].to.saturating_sub(origin[axis]);
                let span = usize::try_from(span).expect("cell span fits in usize");
                *reach = (*reach).max(span);
            }
        }
        let mut index = CoverageTree::new(extent);
        for (id, cell) in cells.iter().enumerate() {
            index.insert(&into_index(cell, origin), id);
        }
        debug!(
            cells = cells.len(),
            ?origin,
            size = ?index.size(),
            "indexed free space"
        );
        Self {
            cells,
            origin,
            index,
        }
    }

    /// Free space of a raster, in its padded coordinates.
    pub fn from_raster(raster: &Raster) -> Self {
        Self::new(&raster.obstacles())
    }

    /// The decomposition, in emission order. Blocking does not change it.
    pub fn cells(&self) -> &[HyperRect<2>] {
        &self.cells
    }

    /// The cell whose still-free part contains the unit cell at `(x, y)`.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<usize> {
        let [ox, oy] = self.origin;
        let point = [x.checked_sub(ox)?, y.checked_sub(oy)?];
        self.index.lookup(point).copied()
    }

    /// True if any part of `rect` is still free.
    pub fn is_free(&self, rect: &HyperRect<2>) -> bool {
        self.index.check(&into_index(rect, self.origin))
    }

    /// Mark `rect` as solid and return the free pieces it covered.
    pub fn block(&mut self, rect: &HyperRect<2>) -> Vec<Fragment> {
        let removed = self.index.remove_collect(&into_index(rect, self.origin));
        removed
            .into_iter()
            .map(|(index, cell)| Fragment {
                cell,
                bounds: self.index.box_for_index(index).shift(self.origin),
            })
            .collect()
    }
}

/// `rect` relative to `origin`. Saturation only moves endpoints further
/// outside the index domain, where the tree clips them.
fn into_index(rect: &HyperRect<2>, origin: [i64; 2]) -> HyperRect<2> {
    HyperRect::from_fn(|axis| {
        let r = rect[axis];
        Range::new(
            r.from.saturating_sub(origin[axis]),
            r.to.saturating_sub(origin[axis]),
        )
    })
}
