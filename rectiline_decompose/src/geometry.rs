// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to Kurbo geometry for rendering and hit testing.

use kurbo::{Point, Rect};
use rectiline_cover::HyperRect;

/// The Kurbo rectangle covering a 2D box.
pub fn to_rect(bx: &HyperRect<2>) -> Rect {
    Rect::new(
        bx[0].from as f64,
        bx[1].from as f64,
        bx[0].to as f64,
        bx[1].to as f64,
    )
}

/// Index of the first cell containing `point`.
///
/// Cells are half-open, so a point on a shared edge belongs to the cell on
/// its larger-coordinate side.
pub fn locate(cells: &[HyperRect<2>], point: Point) -> Option<usize> {
    cells.iter().position(|c| to_rect(c).contains(point))
}

/// Smallest rectangle enclosing every cell, or `None` if there are none.
pub fn bounding_rect(cells: &[HyperRect<2>]) -> Option<Rect> {
    cells.iter().map(to_rect).reduce(|a, b| a.union(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectiline_cover::Range;

    #[test]
    fn rect_conversion() {
        let bx = HyperRect::xy(Range::new(1, 3), Range::new(2, 7));
        assert_eq!(to_rect(&bx), Rect::new(1.0, 2.0, 3.0, 7.0));
    }

    #[test]
    fn locate_respects_half_open_edges() {
        let cells = [
            HyperRect::xy(Range::new(0, 2), Range::new(0, 2)),
            HyperRect::xy(Range::new(2, 4), Range::new(0, 2)),
        ];
        assert_eq!(locate(&cells, Point::new(1.5, 0.5)), Some(0));
        assert_eq!(locate(&cells, Point::new(2.0, 0.5)), Some(1));
        assert_eq!(locate(&cells, Point::new(4.0, 0.5)), None);
        assert_eq!(
            bounding_rect(&cells),
            Some(Rect::new(0.0, 0.0, 4.0, 2.0))
        );
        assert_eq!(bounding_rect(&[]), None);
    }
}
