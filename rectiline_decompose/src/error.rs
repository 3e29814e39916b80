// Copyright 2025 the Rectiline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for raster parsing.

use thiserror::Error;

/// Result type alias for raster parsing.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur while parsing a raster.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RasterError {
    /// No rows, or rows with no cells.
    #[error("raster has no cells")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based row number.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// A character other than `#` or `.`.
    #[error("unexpected {found:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row number.
        row: usize,
        /// Zero-based column number.
        col: usize,
        /// The offending character.
        found: char,
    },
}

impl RasterError {
    /// Create a ragged-row error.
    #[must_use]
    pub const fn ragged(row: usize, expected: usize, found: usize) -> Self {
        Self::Ragged {
            row,
            expected,
            found,
        }
    }

    /// Create an invalid-cell error.
    #[must_use]
    pub const fn invalid_cell(row: usize, col: usize, found: char) -> Self {
        Self::InvalidCell { row, col, found }
    }
}
