// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ASCII rasters as obstacle sources.
//!
//! A raster is a grid of `#` (solid) and `.` (free) cells, surrounded by an
//! implicit one-cell solid border. Raster cell `(col, row)` occupies the unit
//! box `[col + 1, col + 2) × [row + 1, row + 2)`, so the padded grid spans
//! `[0, width + 2) × [0, height + 2)`.

use alloc::vec::Vec;

use rectiline_cover::{HyperRect, Range};

use crate::error::{RasterError, RasterResult};
use crate::obstacle::{Facing, Obstacle};

const SOLID: char = '#';
const FREE: char = '.';

/// A parsed solid/free grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    solid: Vec<bool>,
}

impl Raster {
    /// Parse rows of `#` and `.`.
    ///
    /// All rows must have the same non-zero length.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> RasterResult<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 {
            return Err(RasterError::Empty);
        }
        let mut solid = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(RasterError::ragged(row, width, found));
            }
            for (col, c) in line.chars().enumerate() {
                match c {
                    SOLID => solid.push(true),
                    FREE => solid.push(false),
                    other => return Err(RasterError::invalid_cell(row, col, other)),
                }
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            solid,
        })
    }

    /// Raster width, without the border.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height, without the border.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The padded grid, border included.
    pub fn bounds(&self) -> HyperRect<2> {
        HyperRect::xy(
            Range::new(0, self.width as i64 + 2),
            Range::new(0, self.height as i64 + 2),
        )
    }

    /// True if the padded cell `(x, y)` is solid. Everything outside the
    /// raster proper is solid.
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        let (Ok(col), Ok(row)) = (usize::try_from(x - 1), usize::try_from(y - 1)) else {
            return true;
        };
        if col >= self.width || row >= self.height {
            return true;
        }
        self.solid[row * self.width + col]
    }

    /// Free unit cells in padded coordinates, row by row.
    pub fn free_cells(&self) -> Vec<HyperRect<2>> {
        let bounds = self.bounds();
        let mut out = Vec::new();
        for y in bounds[1].from..bounds[1].to {
            for x in bounds[0].from..bounds[0].to {
                if !self.is_solid(x, y) {
                    out.push(HyperRect::unit([x, y]));
                }
            }
        }
        out
    }

    /// Every boundary between a solid and a free cell, as maximal edge runs.
    pub fn obstacles(&self) -> Vec<Obstacle<2>> {
        let bounds = self.bounds();
        let (w, h) = (bounds[0].to, bounds[1].to);
        let mut out = Vec::new();
        for y in 1..h {
            for x in runs(w, |x| self.is_solid(x, y) && !self.is_solid(x, y - 1)) {
                out.push(Obstacle::horizontal(x, y, Facing::UP));
            }
            for x in runs(w, |x| self.is_solid(x, y - 1) && !self.is_solid(x, y)) {
                out.push(Obstacle::horizontal(x, y, Facing::DOWN));
            }
        }
        for x in 1..w {
            for y in runs(h, |y| self.is_solid(x, y) && !self.is_solid(x - 1, y)) {
                out.push(Obstacle::vertical(x, y, Facing::LEFT));
            }
            for y in runs(h, |y| self.is_solid(x - 1, y) && !self.is_solid(x, y)) {
                out.push(Obstacle::vertical(x, y, Facing::RIGHT));
            }
        }
        out
    }
}

/// Maximal runs of `[0, len)` where `hit` holds.
fn runs(len: i64, mut hit: impl FnMut(i64) -> bool) -> Vec<Range> {
    let mut out = Vec::new();
    let mut start = None;
    for i in 0..len {
        match (hit(i), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push(Range::new(s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push(Range::new(s, len));
    }
    out
}

impl core::fmt::Debug for Raster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut rows = f.debug_list();
        for row in self.solid.chunks(self.width) {
            let line: alloc::string::String = row
                .iter()
                .map(|&s| if s { SOLID } else { FREE })
                .collect();
            rows.entry(&line);
        }
        rows.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn parse_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert_eq!(Raster::parse(&empty), Err(RasterError::Empty));
        assert_eq!(Raster::parse(&[""]), Err(RasterError::Empty));
        assert_eq!(
            Raster::parse(&["..", "."]),
            Err(RasterError::ragged(1, 2, 1))
        );
        assert_eq!(
            Raster::parse(&[".x"]),
            Err(RasterError::invalid_cell(0, 1, 'x'))
        );
    }

    #[test]
    fn padding_is_solid() {
        let r = Raster::parse(&[".#", ".."]).unwrap();
        assert_eq!((r.width(), r.height()), (2, 2));
        assert!(r.is_solid(0, 0));
        assert!(r.is_solid(3, 1));
        assert!(!r.is_solid(1, 1));
        assert!(r.is_solid(2, 1));
        assert!(!r.is_solid(2, 2));
        assert_eq!(r.free_cells().len(), 3);
    }

    #[test]
    fn single_cell_edges() {
        let r = Raster::parse(&["."]).unwrap();
        let obstacles = r.obstacles();
        assert_eq!(
            obstacles,
            vec![
                Obstacle::horizontal(Range::new(1, 2), 1, Facing::DOWN),
                Obstacle::horizontal(Range::new(1, 2), 2, Facing::UP),
                Obstacle::vertical(1, Range::new(1, 2), Facing::RIGHT),
                Obstacle::vertical(2, Range::new(1, 2), Facing::LEFT),
            ]
        );
    }

    #[test]
    fn runs_are_maximal() {
        let r = Raster::parse(&["#.#", "..."]).unwrap();
        let horizontal: Vec<_> = r
            .obstacles()
            .into_iter()
            .filter(|o| o.facing.axis == 1)
            .collect();
        assert_eq!(
            horizontal,
            vec![
                Obstacle::horizontal(Range::new(2, 3), 1, Facing::DOWN),
                Obstacle::horizontal(Range::new(1, 2), 2, Facing::DOWN),
                Obstacle::horizontal(Range::new(3, 4), 2, Facing::DOWN),
                Obstacle::horizontal(Range::new(1, 4), 3, Facing::UP),
            ]
        );
        assert_eq!(runs(5, |i| i != 2), vec![Range::new(0, 2), Range::new(3, 5)]);
    }
}
