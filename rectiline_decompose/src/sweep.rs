// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep-line decomposition of free space into rectangles.
//!
//! The sweep runs along axis 1 (downward in raster terms). Horizontal edges
//! facing [`Facing::UP`] end free regions, edges facing [`Facing::DOWN`]
//! start them. Between events, the active set holds the free horizontal runs
//! just above the sweep line, each with the sweep position it started at.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rectiline_cover::{HyperRect, Range};
use tracing::debug;

use crate::obstacle::{Facing, Obstacle};

/// Cells of a free-space decomposition, in emission order.
pub type Decomposition<const D: usize> = Vec<HyperRect<D>>;

const SWEEP: usize = 1;
const ACROSS: usize = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Close,
    Open,
}

#[derive(Copy, Clone, Debug)]
struct Event {
    pos: i64,
    kind: EventKind,
    span: Range,
}

#[derive(Copy, Clone, Debug)]
struct Active {
    to: i64,
    start: i64,
}

/// Partition the free space bounded by `obstacles` into rectangles.
///
/// Only two dimensions are supported; any other `D` yields an empty result.
/// The obstacle set must enclose the free area: every free region the sweep
/// opens has to be closed again by an edge facing [`Facing::UP`].
///
/// The cells cover the free area exactly, never overlap, and are emitted in
/// order of the sweep position where they end.
///
/// # Panics
///
/// Panics if a closing edge is not entirely above free space, or if free
/// space is left open at the end of the sweep.
pub fn decompose_free_space<const D: usize>(obstacles: &[Obstacle<D>]) -> Decomposition<D> {
    if D != 2 {
        debug!(dims = D, "free-space decomposition only supports two axes");
        return Vec::new();
    }
    let mut events: Vec<Event> = obstacles
        .iter()
        .filter(|o| o.facing.axis == SWEEP && !o.bounds[ACROSS].is_empty())
        .map(|o| Event {
            pos: o.position(),
            kind: if o.facing == Facing::UP {
                EventKind::Close
            } else {
                EventKind::Open
            },
            span: o.bounds[ACROSS],
        })
        .collect();
    events.sort_by_key(|e| (e.pos, e.kind));

    let mut sweep = Sweep::default();
    for batch in events.chunk_by(|a, b| a.pos == b.pos) {
        sweep.advance(batch);
    }
    assert!(
        sweep.active.is_empty(),
        "free space left open at the end of the sweep: {:?}",
        sweep.active
    );
    debug!(
        events = events.len(),
        cells = sweep.cells.len(),
        "decomposed free space"
    );
    sweep
        .cells
        .into_iter()
        .map(|(x, y)| HyperRect::from_fn(|axis| if axis == ACROSS { x } else { y }))
        .collect()
}

#[derive(Default)]
struct Sweep {
    /// Free runs keyed by their start along [`ACROSS`].
    active: BTreeMap<i64, Active>,
    cells: Vec<(Range, Range)>,
}

impl Sweep {
    /// Apply every event at one sweep position. Closing events come first.
    fn advance(&mut self, batch: &[Event]) {
        let mut touched = Vec::new();
        for event in batch {
            match event.kind {
                EventKind::Close => self.close(event, &mut touched),
                EventKind::Open => {
                    let overlaps = self
                        .active
                        .range(..event.span.to)
                        .next_back()
                        .is_some_and(|(_, r)| r.to > event.span.from);
                    assert!(
                        !overlaps,
                        "opening edge {:?} at {} overlaps free space",
                        event.span, event.pos
                    );
                    self.active.insert(
                        event.span.from,
                        Active {
                            to: event.span.to,
                            start: event.pos,
                        },
                    );
                    touched.push(event.span.from);
                }
            }
        }
        if let Some(first) = batch.first() {
            for key in touched {
                self.coalesce(key, first.pos);
            }
        }
    }

    fn close(&mut self, event: &Event, touched: &mut Vec<i64>) {
        let Range { from, to } = event.span;
        let first = self
            .active
            .range(..=from)
            .next_back()
            .map_or(from, |(&k, _)| k);
        let hit: Vec<(i64, Active)> = self
            .active
            .range(first..to)
            .filter(|(_, r)| r.to > from)
            .map(|(&k, &r)| (k, r))
            .collect();
        assert!(
            !hit.is_empty(),
            "closing edge {:?} at {} has no free space above it",
            event.span,
            event.pos
        );
        let mut reach = from;
        for &(key, region) in &hit {
            assert!(
                key <= reach,
                "closing edge {:?} at {} is not fully above free space",
                event.span,
                event.pos
            );
            reach = reach.max(region.to);
        }
        assert!(
            reach >= to,
            "closing edge {:?} at {} is not fully above free space",
            event.span,
            event.pos
        );

        for (key, region) in hit {
            self.active.remove(&key);
            self.emit(Range::new(key, region.to), region.start, event.pos);
            for rest in [Range::new(key, from), Range::new(to, region.to)] {
                if !rest.is_empty() {
                    self.active.insert(
                        rest.from,
                        Active {
                            to: rest.to,
                            start: event.pos,
                        },
                    );
                    touched.push(rest.from);
                }
            }
        }
    }

    /// Merge the run of touching regions around `key` into one region
    /// starting at `pos`.
    fn coalesce(&mut self, key: i64, pos: i64) {
        if !self.active.contains_key(&key) {
            return;
        }
        let mut from = key;
        while let Some((&prev, region)) = self.active.range(..from).next_back() {
            if region.to != from {
                break;
            }
            from = prev;
        }
        let mut members = Vec::new();
        let mut at = from;
        while let Some(&region) = self.active.get(&at) {
            members.push((at, region));
            at = region.to;
        }
        if members.len() < 2 {
            return;
        }
        for &(k, region) in &members {
            self.active.remove(&k);
            self.emit(Range::new(k, region.to), region.start, pos);
        }
        self.active.insert(from, Active { to: at, start: pos });
    }

    fn emit(&mut self, span: Range, start: i64, end: i64) {
        if start < end {
            self.cells.push((span, Range::new(start, end)));
        }
    }
}
