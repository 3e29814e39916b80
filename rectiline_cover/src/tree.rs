// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The D-dimensional coverage tree.

use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::trace;

use crate::layout::HeapLayout;
use crate::mask::{Axes, CoverageBits, MAX_AXES};
use crate::types::{HyperRect, NodeIndex, Range};

#[derive(Clone)]
struct Item<T> {
    bits: CoverageBits,
    value: Option<T>,
}

impl<T> Default for Item<T> {
    fn default() -> Self {
        Self {
            bits: CoverageBits::NONE,
            value: None,
        }
    }
}

/// A D-dimensional segment tree storing values on hyperrectangles.
///
/// Each axis is an implicit binary heap over a power-of-two number of leaves.
/// A node of the tree is one heap position per axis, so the tree is the cross
/// product of `D` one-dimensional segment trees, stored densely.
///
/// A box is inserted by decomposing every axis into its canonical nodes and
/// writing the value at each combination of canonical nodes. Every visited
/// node also records, per subset of axes, that stored data exists at or below
/// it with those axes pinned. That bookkeeping lets [`check`](Self::check)
/// answer from a single traversal and lets [`remove`](Self::remove_with) cut
/// a hole out of stored boxes while the rest keeps its value.
///
/// Values are written first-writer-wins: inserting over a node that already
/// holds a value keeps the old one.
#[derive(Clone)]
pub struct CoverageTree<T, const D: usize> {
    layouts: [HeapLayout; D],
    strides: [usize; D],
    items: Vec<Item<T>>,
}

impl<T, const D: usize> CoverageTree<T, D> {
    const ALL: Axes = Axes::first(D);

    /// Create an empty tree. Each capacity is rounded up to a power of two.
    ///
    /// # Panics
    ///
    /// Panics if a capacity is zero or the dense storage would not fit in
    /// memory addressing.
    pub fn new(capacities: [usize; D]) -> Self {
        const { assert!(D >= 1 && D <= MAX_AXES, "axis count must be in 1..=MAX_AXES") };
        let layouts = capacities.map(HeapLayout::new);
        let mut strides = [0; D];
        let mut total = 1_usize;
        for axis in (0..D).rev() {
            strides[axis] = total;
            total = total
                .checked_mul(layouts[axis].slots())
                .expect("tree storage overflows usize");
        }
        let mut items = Vec::new();
        items.resize_with(total, Item::default);
        Self {
            layouts,
            strides,
            items,
        }
    }

    /// Per-axis capacity after rounding.
    pub fn size(&self) -> [usize; D] {
        self.layouts.map(|l| l.capacity())
    }

    /// The box `[0, capacity)` on every axis.
    pub fn domain(&self) -> HyperRect<D> {
        HyperRect::from_fn(|axis| self.layouts[axis].domain())
    }

    /// The leaf range covered by heap node `node` on `axis`.
    pub fn range_for_index(&self, axis: usize, node: usize) -> Range {
        self.layouts[axis].range_for_index(node)
    }

    /// The box covered by a node address, e.g. one handed to a remove visitor.
    pub fn box_for_index(&self, index: NodeIndex<D>) -> HyperRect<D> {
        HyperRect::from_fn(|axis| self.range_for_index(axis, index[axis]))
    }

    /// The heap node on `axis` covering exactly `range`, if it is an aligned
    /// block.
    pub fn index_for_range(&self, axis: usize, range: Range) -> Option<usize> {
        self.layouts[axis].index_for_range(range)
    }

    /// The node covering exactly `bx`, if every axis is an aligned block.
    pub fn index_for_box(&self, bx: &HyperRect<D>) -> Option<NodeIndex<D>> {
        let mut index = [0; D];
        for axis in 0..D {
            index[axis] = self.layouts[axis].index_for_range(bx[axis])?;
        }
        Some(index)
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items[self.flat(&[1; D])].bits.is_empty()
    }

    /// Remove everything, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.iter_mut().for_each(|item| *item = Item::default());
    }

    /// The value stored exactly at `index`, if any.
    pub fn get(&self, index: NodeIndex<D>) -> Option<&T> {
        let in_range = index
            .iter()
            .zip(self.layouts.iter())
            .all(|(&node, layout)| node > 0 && node < layout.slots());
        if !in_range {
            return None;
        }
        self.items[self.flat(&index)].value.as_ref()
    }

    /// A value whose stored box contains the integer point, if any.
    pub fn lookup(&self, point: [i64; D]) -> Option<&T> {
        if !self.domain().contains_point(point) {
            return None;
        }
        let mut leaf = [0; D];
        for axis in 0..D {
            leaf[axis] = self.layouts[axis].capacity() + usize::try_from(point[axis]).ok()?;
        }
        self.lookup_rec(&leaf, 0, &mut [0; D])
    }

    /// True if `bx` intersects any stored box.
    ///
    /// Parts of `bx` outside the domain are ignored.
    pub fn check(&self, bx: &HyperRect<D>) -> bool {
        let Some(bx) = self.clip(bx) else {
            return false;
        };
        let segments = self.segments(&bx);
        self.check_rec(&segments, 0, &mut [0; D], Axes::empty())
    }

    fn lookup_rec(
        &self,
        leaf: &NodeIndex<D>,
        axis: usize,
        current: &mut NodeIndex<D>,
    ) -> Option<&T> {
        if axis == D {
            return self.items[self.flat(current)].value.as_ref();
        }
        let mut node = leaf[axis];
        while node > 0 {
            current[axis] = node;
            if let Some(value) = self.lookup_rec(leaf, axis + 1, current) {
                return Some(value);
            }
            node >>= 1;
        }
        None
    }

    fn check_rec(
        &self,
        segments: &[Vec<crate::layout::Segment>; D],
        axis: usize,
        index: &mut NodeIndex<D>,
        covered: Axes,
    ) -> bool {
        if axis == D {
            return self.items[self.flat(index)]
                .bits
                .contains(covered ^ Self::ALL);
        }
        for segment in &segments[axis] {
            index[axis] = segment.node;
            let covered = if segment.canonical {
                covered | Axes::axis(axis)
            } else {
                covered
            };
            if self.check_rec(segments, axis + 1, index, covered) {
                return true;
            }
        }
        false
    }

    fn flat(&self, index: &NodeIndex<D>) -> usize {
        index
            .iter()
            .zip(self.strides.iter())
            .map(|(node, stride)| node * stride)
            .sum()
    }

    fn clip(&self, bx: &HyperRect<D>) -> Option<HyperRect<D>> {
        let clipped = bx.intersect(&self.domain());
        (!clipped.is_empty()).then_some(clipped)
    }

    fn segments(&self, bx: &HyperRect<D>) -> [Vec<crate::layout::Segment>; D] {
        core::array::from_fn(|axis| self.layouts[axis].decompose(bx[axis]))
    }
}

impl<T: Clone, const D: usize> CoverageTree<T, D> {
    /// Store `value` on every cell of `bx`.
    ///
    /// Parts of `bx` outside the domain are ignored; an empty box is a no-op.
    pub fn insert(&mut self, bx: &HyperRect<D>, value: T) {
        let Some(bx) = self.clip(bx) else {
            return;
        };
        let segments = self.segments(&bx);
        self.insert_rec(&segments, 0, &mut [0; D], Axes::empty(), &value);
    }

    /// Remove stored coverage inside `bx`.
    pub fn remove(&mut self, bx: &HyperRect<D>) {
        self.remove_with(bx, |_, _| {});
    }

    /// Remove stored coverage inside `bx` and return every cleared node with
    /// its value.
    pub fn remove_collect(&mut self, bx: &HyperRect<D>) -> Vec<(NodeIndex<D>, T)> {
        let mut out = Vec::new();
        self.remove_with(bx, |index, value| out.push((index, value)));
        out
    }

    /// Remove stored coverage inside `bx`, calling `visitor` once for every
    /// stored node that gets cleared.
    ///
    /// Each reported node lies entirely inside `bx`; use
    /// [`box_for_index`](Self::box_for_index) to recover its box. Stored
    /// boxes that straddle the boundary of `bx` are split so the part outside
    /// keeps its value.
    pub fn remove_with(&mut self, bx: &HyperRect<D>, mut visitor: impl FnMut(NodeIndex<D>, T)) {
        let Some(bx) = self.clip(bx) else {
            return;
        };
        let mut cleared = 0_usize;
        let mut report = |index: NodeIndex<D>, value: T| {
            cleared += 1;
            visitor(index, value);
        };
        self.descend(&bx, 0, &mut [1; D], &mut report);
        self.pull_up(&bx, 0, &mut [1; D]);
        trace!(?bx, cleared, "removed coverage");
    }

    fn insert_rec(
        &mut self,
        segments: &[Vec<crate::layout::Segment>; D],
        axis: usize,
        index: &mut NodeIndex<D>,
        covered: Axes,
        value: &T,
    ) {
        if axis == D {
            let flat = self.flat(index);
            let item = &mut self.items[flat];
            if covered == Self::ALL {
                if item.value.is_none() {
                    item.value = Some(value.clone());
                }
                item.bits = CoverageBits::full(D);
            } else {
                item.bits.insert_subsets_of(covered, D);
            }
            return;
        }
        for segment in &segments[axis] {
            index[axis] = segment.node;
            let covered = if segment.canonical {
                covered | Axes::axis(axis)
            } else {
                covered
            };
            self.insert_rec(segments, axis + 1, index, covered, value);
        }
    }

    /// Top-down pass: clear stored nodes inside `bx`, push straddling ones
    /// one level down.
    ///
    /// `index[axis]` is the node being visited on `axis`; later axes are at
    /// their roots.
    fn descend(
        &mut self,
        bx: &HyperRect<D>,
        axis: usize,
        index: &mut NodeIndex<D>,
        visitor: &mut impl FnMut(NodeIndex<D>, T),
    ) {
        if axis == D {
            self.clear_or_push(bx, index, visitor);
            return;
        }
        let node = index[axis];
        let layout = self.layouts[axis];
        if !bx[axis].intersects(&layout.range_for_index(node)) {
            return;
        }
        // Only stored nodes matching the prefix on axes before `axis` are
        // reached from here.
        if !self.items[self.flat(index)]
            .bits
            .contains(Axes::first(axis))
        {
            return;
        }
        self.descend(bx, axis + 1, index, visitor);
        if !layout.is_leaf(node) {
            for child in [2 * node, 2 * node + 1] {
                index[axis] = child;
                self.descend(bx, axis, index, visitor);
            }
            index[axis] = node;
        }
    }

    fn clear_or_push(
        &mut self,
        bx: &HyperRect<D>,
        index: &NodeIndex<D>,
        visitor: &mut impl FnMut(NodeIndex<D>, T),
    ) {
        let flat = self.flat(index);
        let Some(value) = self.items[flat].value.take() else {
            return;
        };
        self.items[flat].bits.remove(Self::ALL);

        let node_box = self.box_for_index(*index);
        let mut covered = Axes::empty();
        for axis in 0..D {
            if bx[axis].contains(&node_box[axis]) {
                covered |= Axes::axis(axis);
            }
        }
        let Some(split) = covered.first_missing(D) else {
            visitor(*index, value);
            return;
        };

        // The node straddles `bx` on `split`, so it is not a leaf there.
        trace!(?index, axis = split, "push value below removal boundary");
        let node = index[split];
        for child in [2 * node, 2 * node + 1] {
            let mut child_index = *index;
            child_index[split] = child;
            self.store(child_index, value.clone());
        }
    }

    /// Make `index` a stored node (first-writer-wins) and record it in the
    /// coverage bits of every ancestor.
    fn store(&mut self, index: NodeIndex<D>, value: T) {
        let flat = self.flat(&index);
        if self.items[flat].value.is_some() {
            return;
        }
        self.items[flat].value = Some(value);
        self.mark_ancestors(&index, 0, &mut [0; D], Axes::empty());
    }

    fn mark_ancestors(
        &mut self,
        index: &NodeIndex<D>,
        axis: usize,
        current: &mut NodeIndex<D>,
        pinned: Axes,
    ) {
        if axis == D {
            let flat = self.flat(current);
            self.items[flat].bits.insert_subsets_of(pinned, D);
            return;
        }
        let mut node = index[axis];
        let mut pin = Axes::axis(axis);
        while node > 0 {
            current[axis] = node;
            self.mark_ancestors(index, axis + 1, current, pinned | pin);
            pin = Axes::empty();
            node >>= 1;
        }
    }

    /// Bottom-up pass over the region touched by [`Self::descend`]: rebuild
    /// every node's bits from its own value and its children.
    fn pull_up(&mut self, bx: &HyperRect<D>, axis: usize, index: &mut NodeIndex<D>) {
        if axis == D {
            self.recompute(index);
            return;
        }
        let node = index[axis];
        let layout = self.layouts[axis];
        if !bx[axis].intersects(&layout.range_for_index(node)) {
            return;
        }
        // Any stored node below may have lost its value, whatever its
        // prefix, so only an empty subtree is skipped.
        if self.items[self.flat(index)].bits.is_empty() {
            return;
        }
        if !layout.is_leaf(node) {
            for child in [2 * node, 2 * node + 1] {
                index[axis] = child;
                self.pull_up(bx, axis, index);
            }
            index[axis] = node;
        }
        self.pull_up(bx, axis + 1, index);
    }

    fn recompute(&mut self, index: &NodeIndex<D>) {
        let flat = self.flat(index);
        if self.items[flat].value.is_some() {
            self.items[flat].bits = CoverageBits::full(D);
            return;
        }
        let mut bits = CoverageBits::NONE;
        for axis in 0..D {
            let node = index[axis];
            if self.layouts[axis].is_leaf(node) {
                continue;
            }
            // Children along `axis` summarize subsets that leave `axis` free.
            let stride = self.strides[axis];
            let base = flat - stride * node;
            let left = self.items[base + stride * (2 * node)].bits;
            let right = self.items[base + stride * (2 * node + 1)].bits;
            bits = bits.union(left.union(right).without_axis(axis, D));
        }
        self.items[flat].bits = bits;
    }
}

impl<T, const D: usize> Debug for CoverageTree<T, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let stored = self.items.iter().filter(|i| i.value.is_some()).count();
        f.debug_struct("CoverageTree")
            .field("size", &self.size())
            .field("slots", &self.items.len())
            .field("stored", &stored)
            .finish_non_exhaustive()
    }
}
