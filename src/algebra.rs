//! Stateless linear-algebra operations over [`Matrix`] values.
//!
//! Every function here is pure: it reads its operands and returns a freshly
//! built [`Matrix`] or scalar, never mutating an input. Vectors are plain
//! `&[f64]` slices with no invariant beyond the per-call length checks.
use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Multiplies every cell of `m` by the scalar `s`, preserving shape.
pub fn scalar_multiply(m: &Matrix, s: f64) -> Matrix {
    log::debug!("multiplying matrix: {} by s = {}", m.name(), s);
    let rows = m
        .rows()
        .iter()
        .map(|row| row.iter().map(|value| value * s).collect())
        .collect();
    Matrix::from_rows(rows)
}

/// Adds two matrices of equal shape cell by cell.
pub fn add(m1: &Matrix, m2: &Matrix) -> Result<Matrix, MatrixError> {
    log::debug!("adding matrix: {} to: {}", m1.name(), m2.name());
    if !dimensions_equal(m1, m2) {
        return Err(MatrixError::DimensionMismatch {
            left: m1.shape(),
            right: m2.shape(),
        });
    }

    let rows = m1
        .rows()
        .iter()
        .zip(m2.rows())
        .map(|(r1, r2)| r1.iter().zip(r2).map(|(a, b)| a + b).collect())
        .collect();
    Ok(Matrix::from_rows(rows))
}

/// Subtracts `m2` from `m1`, defined as `add(m1, scalar_multiply(m2, -1))`.
pub fn subtract(m1: &Matrix, m2: &Matrix) -> Result<Matrix, MatrixError> {
    log::debug!("subtracting matrix: {} from: {}", m2.name(), m1.name());
    add(m1, &scalar_multiply(m2, -1.0))
}

/// Returns the dot product of two vectors of equal length.
///
/// Elements are accumulated in index order 0..n, which pins down the
/// floating-point rounding path for reproducibility.
pub fn dot_product(v1: &[f64], v2: &[f64]) -> Result<f64, MatrixError> {
    if v1.len() != v2.len() {
        return Err(MatrixError::LengthMismatch {
            left: v1.len(),
            right: v2.len(),
        });
    }
    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

/// Multiplies `m1` by `m2`.
///
/// Fails with [`MatrixError::InnerDimensionMismatch`] unless the column count
/// of `m1` equals the row count of `m2`. The result has `m1`'s row count and
/// `m2`'s column count; each cell is the dot product of the corresponding row
/// of `m1` and column of `m2`. Columns of `m2` are materialized once each.
pub fn multiply(m1: &Matrix, m2: &Matrix) -> Result<Matrix, MatrixError> {
    log::debug!("multiplying matrix: {} by: {}", m1.name(), m2.name());
    let (m1_rows, m1_cols) = m1.shape();
    let (m2_rows, m2_cols) = m2.shape();
    if m1_cols != m2_rows {
        return Err(MatrixError::InnerDimensionMismatch {
            left_cols: m1_cols,
            right_rows: m2_rows,
        });
    }

    let m2_columns: Vec<Vec<f64>> = (0..m2_cols)
        .map(|j| m2.column(j))
        .collect::<Result<_, _>>()?;

    let mut rows = Vec::with_capacity(m1_rows);
    for i in 0..m1_rows {
        let row_vector = m1.row(i)?;
        let mut row = Vec::with_capacity(m2_cols);
        for column_vector in &m2_columns {
            row.push(dot_product(row_vector, column_vector)?);
        }
        rows.push(row);
    }

    Ok(Matrix::from_rows(rows))
}

/// Returns true if both matrices share the same row and column counts.
/// Values are not compared.
pub fn dimensions_equal(m1: &Matrix, m2: &Matrix) -> bool {
    let (rows1, cols1) = m1.shape();
    let (rows2, cols2) = m2.shape();

    if rows1 != rows2 {
        log::warn!(
            "row count is not equal between m1: {} and m2: {}",
            rows1,
            rows2
        );
        return false;
    }
    if cols1 != cols2 {
        log::warn!(
            "column count is not equal between m1: {} and m2: {}",
            cols1,
            cols2
        );
        return false;
    }
    true
}

/// Returns true if the matrices have equal shape and every corresponding
/// cell compares equal.
///
/// Comparison is exact IEEE-754 equality with no tolerance, so a matrix
/// containing NaN is never equal to anything, including itself.
pub fn is_equal(m1: &Matrix, m2: &Matrix) -> bool {
    if !dimensions_equal(m1, m2) {
        return false;
    }
    m1.rows()
        .iter()
        .zip(m2.rows())
        .all(|(r1, r2)| r1.iter().zip(r2).all(|(a, b)| a == b))
}
