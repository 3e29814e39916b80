// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage masks and the per-node coverage set.

/// Largest supported axis count. A node keeps one bit per axis subset, so
/// `2^MAX_AXES` bits must fit in [`CoverageBits`].
pub const MAX_AXES: usize = 6;

bitflags::bitflags! {
    /// Set of axes on which a traversal sits on a canonical node.
    ///
    /// Bit `d` set means axis `d` reached a node whose leaf range lies inside
    /// the query box, so no further splitting happens on that axis.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Axes: u8 {
        /// Axis 0.
        const AXIS_0 = 1 << 0;
        /// Axis 1.
        const AXIS_1 = 1 << 1;
        /// Axis 2.
        const AXIS_2 = 1 << 2;
        /// Axis 3.
        const AXIS_3 = 1 << 3;
        /// Axis 4.
        const AXIS_4 = 1 << 4;
        /// Axis 5.
        const AXIS_5 = 1 << 5;
    }
}

impl Axes {
    /// The single-axis mask for `axis`.
    pub const fn axis(axis: usize) -> Self {
        Self::from_bits_retain(1 << axis)
    }

    /// Mask with the first `dims` axes set.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "`dims` is at most MAX_AXES, so the mask fits in a byte."
    )]
    pub const fn first(dims: usize) -> Self {
        Self::from_bits_retain(((1_u16 << dims) - 1) as u8)
    }

    /// True if `axis` is in the mask.
    pub const fn has(self, axis: usize) -> bool {
        self.bits() & (1 << axis) != 0
    }

    /// Lowest axis below `dims` not in the mask.
    pub fn first_missing(self, dims: usize) -> Option<usize> {
        (0..dims).find(|&axis| !self.has(axis))
    }

    /// Every mask over `dims` axes, in increasing bit order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "`dims` is at most MAX_AXES, so every subset fits in a byte."
    )]
    pub fn all_subsets(dims: usize) -> impl Iterator<Item = Self> {
        (0..1_u16 << dims).map(|bits| Self::from_bits_retain(bits as u8))
    }
}

/// One bit per axis subset: the `hasData` set of a tree node.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoverageBits(u64);

impl CoverageBits {
    /// No coverage recorded.
    pub const NONE: Self = Self(0);

    /// Every subset of `dims` axes.
    pub const fn full(dims: usize) -> Self {
        if dims == MAX_AXES {
            Self(u64::MAX)
        } else {
            Self((1_u64 << (1 << dims)) - 1)
        }
    }

    /// True if the subset `mask` is recorded.
    pub const fn contains(self, mask: Axes) -> bool {
        self.0 & (1 << mask.bits()) != 0
    }

    /// Record the subset `mask`.
    pub const fn insert(&mut self, mask: Axes) {
        self.0 |= 1 << mask.bits();
    }

    /// Forget the subset `mask`.
    pub const fn remove(&mut self, mask: Axes) {
        self.0 &= !(1 << mask.bits());
    }

    /// Record every subset of `mask` (including the empty one).
    pub fn insert_subsets_of(&mut self, mask: Axes, dims: usize) {
        for sub in Axes::all_subsets(dims) {
            if mask.contains(sub) {
                self.insert(sub);
            }
        }
    }

    /// True if nothing is recorded.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Keep only subsets that leave `axis` out.
    #[must_use]
    pub fn without_axis(self, axis: usize, dims: usize) -> Self {
        let mut out = Self::NONE;
        for sub in Axes::all_subsets(dims) {
            if !sub.has(axis) && self.contains(sub) {
                out.insert(sub);
            }
        }
        out
    }
}

impl core::fmt::Debug for CoverageBits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CoverageBits({:#b})", self.0)
    }
}
