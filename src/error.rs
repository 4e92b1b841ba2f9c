//! Errors reported by matrix construction, checked access and multiplication.

use thiserror::Error;

/// Everything that can go wrong when building or multiplying a [`Matrix`](crate::Matrix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row of a nested literal has a different length than the first row.
    #[error("inconsistent row length: row {row} has {found} elements, expected {expected}")]
    InconsistentShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Degenerate input, such as an empty row list or a flat buffer of the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `left.cols != right.rows` in a multiply.
    #[error("matrix dimensions are not compatible for multiplication: {left:?} * {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Only produced by the checked accessors.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
