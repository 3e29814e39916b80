// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: half-open ranges and D-axis boxes.

use core::fmt;
use core::ops::{Index, IndexMut};

/// Half-open integer interval `[from, to)`.
///
/// A range with `to <= from` is empty.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    /// Inclusive start.
    pub from: i64,
    /// Exclusive end.
    pub to: i64,
}

impl Range {
    /// The canonical empty range `[0, 0)`.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Create a range from its endpoints.
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Number of integers in the range, zero when empty or inverted.
    ///
    /// Saturates at `i64::MAX` for ranges wider than that.
    pub const fn size(&self) -> i64 {
        if self.to > self.from {
            self.to.saturating_sub(self.from)
        } else {
            0
        }
    }

    /// True if the range holds no integers.
    pub const fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    /// True if both ranges share at least one integer.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.from < other.to && other.from < self.to && !self.is_empty() && !other.is_empty()
    }

    /// True if every integer of `other` lies in `self`.
    ///
    /// An empty `other` is contained in anything.
    pub const fn contains(&self, other: &Self) -> bool {
        other.is_empty() || (self.from <= other.from && other.to <= self.to)
    }

    /// True if `x` lies in the range.
    pub const fn contains_point(&self, x: i64) -> bool {
        self.from <= x && x < self.to
    }

    /// The overlap of two ranges. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(self.from.max(other.from), self.to.min(other.to))
    }

    /// The range moved by `by`, with endpoints saturating at the `i64` limits.
    pub const fn shift(&self, by: i64) -> Self {
        Self::new(self.from.saturating_add(by), self.to.saturating_add(by))
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}

/// Axis-aligned box with `D` half-open integer axes.
///
/// An empty range on any axis makes the whole box degenerate.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HyperRect<const D: usize> {
    /// Per-axis extents.
    pub axes: [Range; D],
}

impl<const D: usize> HyperRect<D> {
    /// Create a box from its per-axis ranges.
    pub const fn new(axes: [Range; D]) -> Self {
        Self { axes }
    }

    /// Create a box by computing each axis.
    pub fn from_fn(f: impl FnMut(usize) -> Range) -> Self {
        Self {
            axes: core::array::from_fn(f),
        }
    }

    /// The unit box covering the single integer point `p`.
    pub fn unit(p: [i64; D]) -> Self {
        Self::from_fn(|axis| Range::new(p[axis], p[axis] + 1))
    }

    /// True if any axis is empty.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().any(Range::is_empty)
    }

    /// Number of unit cells in the box, saturating at `i64::MAX`.
    pub fn volume(&self) -> i64 {
        self.axes
            .iter()
            .map(Range::size)
            .fold(1, i64::saturating_mul)
    }

    /// True if the boxes share at least one unit cell.
    pub fn intersects(&self, other: &Self) -> bool {
        self.axes
            .iter()
            .zip(other.axes.iter())
            .all(|(a, b)| a.intersects(b))
    }

    /// True if every cell of `other` lies in `self`.
    pub fn contains(&self, other: &Self) -> bool {
        other.is_empty()
            || self
                .axes
                .iter()
                .zip(other.axes.iter())
                .all(|(a, b)| a.contains(b))
    }

    /// True if the integer point lies in the box.
    pub fn contains_point(&self, p: [i64; D]) -> bool {
        self.axes
            .iter()
            .zip(p)
            .all(|(r, x)| r.contains_point(x))
    }

    /// Per-axis intersection. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_fn(|axis| self.axes[axis].intersect(&other.axes[axis]))
    }

    /// The box moved by `by` on each axis. See [`Range::shift`].
    pub fn shift(&self, by: [i64; D]) -> Self {
        Self::from_fn(|axis| self.axes[axis].shift(by[axis]))
    }
}

impl HyperRect<2> {
    /// Create a 2D box from its two axis ranges.
    pub const fn xy(x: Range, y: Range) -> Self {
        Self { axes: [x, y] }
    }
}

impl<const D: usize> Index<usize> for HyperRect<D> {
    type Output = Range;

    fn index(&self, axis: usize) -> &Range {
        &self.axes[axis]
    }
}

impl<const D: usize> IndexMut<usize> for HyperRect<D> {
    fn index_mut(&mut self, axis: usize) -> &mut Range {
        &mut self.axes[axis]
    }
}

impl<const D: usize> fmt::Debug for HyperRect<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.axes.iter()).finish()
    }
}

impl<const D: usize> From<[Range; D]> for HyperRect<D> {
    fn from(axes: [Range; D]) -> Self {
        Self { axes }
    }
}

/// Address of one node in a coverage tree: one heap position per axis.
pub type NodeIndex<const D: usize> = [usize; D];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_basics() {
        let r = Range::new(2, 5);
        assert_eq!(r.size(), 3);
        assert!(!r.is_empty());
        assert!(Range::new(5, 5).is_empty());
        assert_eq!(Range::new(7, 3).size(), 0);
        assert!(r.contains(&Range::new(3, 5)));
        assert!(!r.contains(&Range::new(1, 3)));
        assert!(r.contains(&Range::EMPTY));
        assert!(r.intersects(&Range::new(4, 9)));
        assert!(!r.intersects(&Range::new(5, 9)), "half-open ends do not touch");
        assert!(!r.intersects(&Range::new(3, 3)));
        assert_eq!(r.intersect(&Range::new(4, 9)), Range::new(4, 5));
    }

    #[test]
    fn box_containment_and_volume() {
        let a = HyperRect::xy(Range::new(0, 4), Range::new(0, 2));
        let b = HyperRect::xy(Range::new(1, 3), Range::new(1, 2));
        assert!(a.contains(&b));
        assert!(!b.contains(&a));
        assert_eq!(a.volume(), 8);
        assert!(a.contains_point([3, 1]));
        assert!(!a.contains_point([4, 1]));
        assert_eq!(HyperRect::unit([2, 3]).volume(), 1);
    }

    #[test]
    fn extreme_endpoints_saturate() {
        let huge = Range::new(i64::MIN, i64::MAX);
        assert_eq!(huge.size(), i64::MAX);
        assert!(!huge.is_empty());
        assert_eq!(Range::new(i64::MAX, i64::MIN).size(), 0);
        let bx = HyperRect::xy(huge, Range::new(0, 2));
        assert_eq!(bx.volume(), i64::MAX);
        assert_eq!(HyperRect::xy(huge, Range::new(0, 0)).volume(), 0);
    }

    #[test]
    fn shifting_moves_every_axis() {
        let a = HyperRect::xy(Range::new(-3, -1), Range::new(2, 5));
        assert_eq!(
            a.shift([3, -2]),
            HyperRect::xy(Range::new(0, 2), Range::new(0, 3))
        );
        assert_eq!(a.shift([3, -2]).volume(), a.volume());
        assert_eq!(
            Range::new(i64::MIN + 1, 0).shift(-5),
            Range::new(i64::MIN, -5)
        );
    }

    #[test]
    fn degenerate_axis_empties_box() {
        let a = HyperRect::xy(Range::new(0, 4), Range::new(2, 2));
        assert!(a.is_empty());
        assert_eq!(a.volume(), 0);
        let b = HyperRect::xy(Range::new(0, 4), Range::new(0, 4));
        assert!(!a.intersects(&b));
    }
}
