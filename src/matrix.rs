use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, MatrixError};

/// A dense matrix of `f64` values with a display name.
///
/// The outer `Vec` holds the rows, the inner `Vec`s the column values of each
/// row. The grid is owned outright: constructors take ownership of (or copy)
/// their input, and the algebra functions in [`crate::algebra`] only ever read
/// a `Matrix` and build a new one, so no aliasing of row storage is possible.
///
/// Rectangularity (every row the same length) is assumed, not validated, by
/// [`Matrix::from_rows`]. A jagged grid surfaces later as an out-of-bounds
/// error at access time.
///
/// The `name` is a free-form label used in logs and derived names; it carries
/// no algebraic meaning and is ignored by [`crate::algebra::is_equal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    name: String,
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Wraps the given grid verbatim under a generic name.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        log::debug!("building new matrix with {} rows", rows.len());
        Matrix {
            name: "matrix".to_string(),
            rows,
        }
    }

    /// Creates an `m` x `n` matrix of zeroes.
    pub fn zeros(m: usize, n: usize) -> Self {
        log::debug!("building zero matrix when m = {} and n = {}", m, n);
        let mut matrix = Matrix::from_elem(m, n, 0.0);
        matrix.name = format!("zero ({}, {}) matrix", m, n);
        matrix
    }

    /// Creates an `m` x `n` matrix with every cell set to `value`.
    pub fn from_elem(m: usize, n: usize, value: f64) -> Self {
        log::debug!(
            "building value matrix when m = {}, n = {} and value = {}",
            m,
            n,
            value
        );
        Matrix {
            name: format!("value ({}, {}) matrix", m, n),
            rows: vec![vec![value; n]; m],
        }
    }

    /// Creates the `n` x `n` identity matrix, named `I{n}`.
    pub fn identity(n: usize) -> Self {
        log::debug!("building identity matrix when n = {}", n);
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Matrix {
            name: format!("I{}", n),
            rows,
        }
    }

    /// The display name of this matrix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Borrowed view of the full grid.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows (the `m` dimension).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the `n` dimension), read from the first row.
    ///
    /// A zero-row matrix has no first row, so this fails exactly like
    /// [`Matrix::row`] with index 0 rather than reporting 0 columns.
    pub fn column_count(&self) -> Result<usize, MatrixError> {
        self.row(0).map(|row| row.len())
    }

    /// The `(rows, columns)` pair. A zero-row matrix reports `(0, 0)`.
    pub fn shape(&self) -> (usize, usize) {
        let cols = self.rows.first().map_or(0, |row| row.len());
        (self.rows.len(), cols)
    }

    /// Returns true if the row and column counts are equal.
    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.shape();
        rows == cols
    }

    /// The value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let row = self.row(i)?;
        if j >= row.len() {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: j,
                len: row.len(),
            });
        }
        Ok(row[j])
    }

    /// Borrowed view of the `i`th row.
    pub fn row(&self, i: usize) -> Result<&[f64], MatrixError> {
        if i >= self.rows.len() {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Row,
                index: i,
                len: self.rows.len(),
            });
        }
        Ok(&self.rows[i])
    }

    /// The `j`th column, materialized freshly on every call (O(rows)).
    pub fn column(&self, j: usize) -> Result<Vec<f64>, MatrixError> {
        let cols = self.column_count()?;
        if j >= cols {
            return Err(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: j,
                len: cols,
            });
        }
        self.rows
            .iter()
            .map(|row| {
                row.get(j).copied().ok_or(MatrixError::IndexOutOfBounds {
                    axis: Axis::Column,
                    index: j,
                    len: row.len(),
                })
            })
            .collect()
    }

    /// Appends one coefficient value to the right edge of every row.
    ///
    /// Fails with [`MatrixError::ColumnSizeMismatch`] when the column length
    /// does not equal the row count. The result is named
    /// `augmented_<original name>`.
    pub fn augment_column(&self, column: &[f64]) -> Result<Matrix, MatrixError> {
        log::debug!("building augmented coefficient matrix from {}", self.name);
        if column.len() != self.rows.len() {
            return Err(MatrixError::ColumnSizeMismatch {
                column_len: column.len(),
                row_count: self.rows.len(),
            });
        }

        let rows = self
            .rows
            .iter()
            .zip(column)
            .map(|(row, &coefficient)| {
                let mut augmented = row.clone();
                augmented.push(coefficient);
                augmented
            })
            .collect();

        Ok(Matrix {
            name: format!("augmented_{}", self.name),
            rows,
        })
    }

    /// Writes the name and contents of this matrix to the info log, one row
    /// per line.
    pub fn log(&self) {
        log::info!("name: {}", self.name);
        for row in &self.rows {
            let values = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            log::info!("{}", values);
        }
    }
}

/// Canonical serialization: nested bracket grammar with no spaces, e.g.
/// `[[1,2,3],[4,5,6]]`. Parse it back with [`str::parse`].
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i != 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
