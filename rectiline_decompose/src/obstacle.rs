// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Obstacle boundary edges.

use alloc::vec::Vec;

use rectiline_cover::{HyperRect, Range};

/// Direction an obstacle edge faces: from its solid side into free space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Facing {
    /// Axis the edge is perpendicular to.
    pub axis: usize,
    /// True if free space lies toward larger coordinates on `axis`.
    pub positive: bool,
}

impl Facing {
    /// Free space above (smaller axis-1 coordinate). Ends a free region in
    /// the sweep.
    pub const UP: Self = Self::new(1, false);
    /// Free space below (larger axis-1 coordinate). Starts a free region in
    /// the sweep.
    pub const DOWN: Self = Self::new(1, true);
    /// Free space to the left (smaller axis-0 coordinate).
    pub const LEFT: Self = Self::new(0, false);
    /// Free space to the right (larger axis-0 coordinate).
    pub const RIGHT: Self = Self::new(0, true);

    /// Create a facing from its axis and sign.
    pub const fn new(axis: usize, positive: bool) -> Self {
        Self { axis, positive }
    }

    /// The facing pointing the other way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.axis, !self.positive)
    }
}

/// One obstacle boundary edge: a box with zero extent along its facing axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle<const D: usize> {
    /// The edge itself. `bounds[facing.axis]` is the degenerate range
    /// `[p, p)` at the edge's coordinate `p`.
    pub bounds: HyperRect<D>,
    /// Which side is free.
    pub facing: Facing,
}

/// Obstacle edges handed to a decomposition.
pub type ObstacleSet<const D: usize> = Vec<Obstacle<D>>;

impl<const D: usize> Obstacle<D> {
    /// Create an edge.
    ///
    /// # Panics
    ///
    /// Panics if the facing axis is out of range or `bounds` has extent along
    /// it.
    pub fn new(bounds: HyperRect<D>, facing: Facing) -> Self {
        assert!(facing.axis < D, "facing axis {} out of range", facing.axis);
        let across = bounds[facing.axis];
        assert!(
            across.from == across.to,
            "obstacle edge {bounds:?} is not flat along axis {}",
            facing.axis
        );
        Self { bounds, facing }
    }

    /// Coordinate of the edge along its facing axis.
    pub fn position(&self) -> i64 {
        self.bounds[self.facing.axis].from
    }
}

impl Obstacle<2> {
    /// A horizontal edge at `y` spanning `x`, facing [`Facing::UP`] or
    /// [`Facing::DOWN`].
    pub fn horizontal(x: Range, y: i64, facing: Facing) -> Self {
        Self::new(HyperRect::xy(x, Range::new(y, y)), facing)
    }

    /// A vertical edge at `x` spanning `y`, facing [`Facing::LEFT`] or
    /// [`Facing::RIGHT`].
    pub fn vertical(x: i64, y: Range, facing: Facing) -> Self {
        Self::new(HyperRect::xy(Range::new(x, x), y), facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facings() {
        assert_eq!(Facing::UP.opposite(), Facing::DOWN);
        assert_eq!(Facing::RIGHT.opposite(), Facing::LEFT);
        assert_eq!(Facing::UP.axis, 1);
        assert_eq!(Facing::LEFT.axis, 0);
    }

    #[test]
    fn edge_position() {
        let e = Obstacle::horizontal(Range::new(1, 4), 3, Facing::UP);
        assert_eq!(e.position(), 3);
        assert_eq!(e.bounds[0], Range::new(1, 4));
        let v = Obstacle::vertical(2, Range::new(0, 5), Facing::RIGHT);
        assert_eq!(v.position(), 2);
    }

    #[test]
    #[should_panic(expected = "is not flat")]
    fn thick_edge_is_rejected() {
        let _ = Obstacle::new(
            HyperRect::xy(Range::new(0, 2), Range::new(0, 1)),
            Facing::DOWN,
        );
    }
}
