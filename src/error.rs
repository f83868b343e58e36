use std::error::Error;
use std::fmt;

/// Axis named by an out-of-bounds access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors raised by matrix construction, access, parsing, and algebra.
///
/// All of these are deterministic contract violations: they are raised at
/// the point of the violation and never retried or recovered internally.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A row or column index is `>=` the respective count.
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },
    /// Two matrices do not share the same shape (add/subtract).
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Two vectors do not share the same length (dot product).
    LengthMismatch { left: usize, right: usize },
    /// Left operand's column count does not match right operand's row count.
    InnerDimensionMismatch { left_cols: usize, right_rows: usize },
    /// Coefficient column length does not match the matrix row count.
    ColumnSizeMismatch { column_len: usize, row_count: usize },
    /// A textual token failed to parse as a double.
    NumberFormat { token: String },
    /// The parser hit a character the grammar does not allow at this point.
    UnexpectedChar { found: char, at: usize },
    /// The input ended before the grammar was satisfied.
    UnexpectedEnd,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::IndexOutOfBounds { axis, index, len } => write!(
                f,
                "{} index {} is greater than or equal to the size: {}",
                axis, index, len
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "dimensions not equal: ({}, {}) vs ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::LengthMismatch { left, right } => write!(
                f,
                "length of vectors must be equal to find dot product: {} vs {}",
                left, right
            ),
            MatrixError::InnerDimensionMismatch {
                left_cols,
                right_rows,
            } => write!(
                f,
                "the columns of m1 ({}) must equal the rows of m2 ({})",
                left_cols, right_rows
            ),
            MatrixError::ColumnSizeMismatch {
                column_len,
                row_count,
            } => write!(
                f,
                "coefficient column size {} must equal the matrix row count {}",
                column_len, row_count
            ),
            MatrixError::NumberFormat { token } => {
                write!(f, "cannot parse \"{}\" as a number", token)
            }
            MatrixError::UnexpectedChar { found, at } => {
                write!(f, "unexpected character '{}' at byte {}", found, at)
            }
            MatrixError::UnexpectedEnd => write!(f, "input ended before the matrix was closed"),
        }
    }
}

impl Error for MatrixError {}
