// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implicit binary-heap layout of one tree axis.
//!
//! An axis with capacity `n` (a power of two) numbers its nodes like a binary
//! heap: the root is `1`, the children of `i` are `2i` and `2i + 1`, and the
//! leaves occupy `[n, 2n)`. Leaf `n + x` covers the unit range `[x, x + 1)`.

use alloc::vec::Vec;

use crate::types::Range;

/// Round `x` up to the next power of two.
///
/// # Panics
///
/// Panics if `x` is zero or the result would overflow `usize`.
pub fn to_pow2(x: usize) -> usize {
    assert!(x > 0, "capacity must be positive");
    x.checked_next_power_of_two()
        .expect("capacity overflows the addressable range")
}

/// Heap layout for one axis with a power-of-two capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeapLayout {
    capacity: usize,
}

/// One node produced by [`HeapLayout::decompose`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Heap index of the node.
    pub node: usize,
    /// True if the node's range lies inside the decomposed range and its
    /// parent's does not.
    pub canonical: bool,
}

impl HeapLayout {
    /// Layout for `capacity` leaves, rounded up to a power of two.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: to_pow2(capacity),
        }
    }

    /// Number of leaves.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of heap slots, including the unused slot `0`.
    pub const fn slots(&self) -> usize {
        2 * self.capacity
    }

    /// The full leaf domain `[0, capacity)`.
    pub fn domain(&self) -> Range {
        Range::new(0, self.capacity as i64)
    }

    /// True if `node` is a leaf.
    pub const fn is_leaf(&self, node: usize) -> bool {
        node >= self.capacity
    }

    /// The leaf range covered by `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is `0` or not below `2 * capacity`.
    pub fn range_for_index(&self, node: usize) -> Range {
        assert!(
            node > 0 && node < self.slots(),
            "heap index {node} outside [1, {})",
            self.slots()
        );
        let shift = self.capacity.trailing_zeros() - node.ilog2();
        let from = (node << shift) - self.capacity;
        let width = 1_usize << shift;
        Range::new(from as i64, (from + width) as i64)
    }

    /// The node covering exactly `range`, if `range` is an aligned block.
    pub fn index_for_range(&self, range: Range) -> Option<usize> {
        if range.is_empty() || !self.domain().contains(&range) {
            return None;
        }
        let from = usize::try_from(range.from).ok()?;
        let width = usize::try_from(range.size()).ok()?;
        if !width.is_power_of_two() || from % width != 0 {
            return None;
        }
        Some((self.capacity + from) / width)
    }

    /// Canonical segment-tree decomposition of `range`, plus every strict
    /// ancestor of a canonical node.
    ///
    /// `range` must be non-empty and lie inside [`Self::domain`]. Canonical
    /// nodes are disjoint and cover `range` exactly; the ancestors are the
    /// nodes that straddle a boundary of `range`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "`range` lies inside the domain, which is indexed by usize."
    )]
    pub fn decompose(&self, range: Range) -> Vec<Segment> {
        debug_assert!(
            !range.is_empty() && self.domain().contains(&range),
            "range {range:?} outside axis domain"
        );
        let mut out = Vec::new();
        let mut lo = self.capacity + range.from as usize;
        let mut hi = self.capacity + range.to as usize;
        let boundary = [lo, hi - 1];
        while lo < hi {
            if lo & 1 == 1 {
                out.push(Segment {
                    node: lo,
                    canonical: true,
                });
                lo += 1;
            }
            if hi & 1 == 1 {
                hi -= 1;
                out.push(Segment {
                    node: hi,
                    canonical: true,
                });
            }
            lo >>= 1;
            hi >>= 1;
        }
        // Both boundary leaves sit at the same depth, so their ancestor
        // chains meet at the same step. Above a straddling node every
        // ancestor straddles too.
        let straddles = |node: usize| !range.contains(&self.range_for_index(node));
        let (mut a, mut b) = (boundary[0] >> 1, boundary[1] >> 1);
        while a != b {
            for node in [a, b] {
                if straddles(node) {
                    out.push(Segment {
                        node,
                        canonical: false,
                    });
                }
            }
            a >>= 1;
            b >>= 1;
        }
        while a > 0 {
            if straddles(a) {
                out.push(Segment {
                    node: a,
                    canonical: false,
                });
            }
            a >>= 1;
        }
        out
    }
}
