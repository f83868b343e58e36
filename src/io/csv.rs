//! CSV matrix reader.
//!
//! Format: one matrix row per line, comma-separated `f64` fields, no header,
//! no quoting or escaping. [`read_matrix_strict`] propagates the first
//! failure of any kind with context; [`read_matrix`] keeps the original
//! best-effort policy for I/O failures only: the error is logged and the
//! rows read so far are returned, while a malformed field still surfaces as
//! [`MatrixError::NumberFormat`].
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Reads a CSV file into a [`Matrix`], failing on the first I/O or parse
/// error with context naming the path, row, and field.
pub fn read_matrix_strict<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    log::info!("creating matrix from csv file: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let row: Vec<f64> = record
            .iter()
            .enumerate()
            .map(|(field_idx, field)| {
                field.parse::<f64>().with_context(|| {
                    format!(
                        "Invalid value '{}' at row {}, field {}",
                        field,
                        row_idx + 1,
                        field_idx + 1
                    )
                })
            })
            .collect::<Result<_>>()?;
        rows.push(row);
    }

    let mut matrix = Matrix::from_rows(rows);
    matrix.set_name(path.display().to_string());
    Ok(matrix)
}

/// Reads a CSV file into a [`Matrix`], degrading on I/O failure.
///
/// A missing file or an unreadable record is logged and reading stops; the
/// matrix assembled so far (possibly empty) is returned. A field that does
/// not parse as a double is a caller error, not an I/O condition, and fails
/// with [`MatrixError::NumberFormat`]. Callers that need to distinguish
/// "file missing" from "legitimately empty" should use
/// [`read_matrix_strict`] instead.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    log::info!("creating matrix from csv file: {}", path.display());

    let mut rows = Vec::new();

    match csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
    {
        Ok(mut reader) => {
            for record in reader.records() {
                let record = match record {
                    Ok(record) => record,
                    Err(e) => {
                        log::error!("{}", e);
                        break;
                    }
                };
                let mut row = Vec::with_capacity(record.len());
                for field in record.iter() {
                    let value = field.parse::<f64>().map_err(|_| {
                        let e = MatrixError::NumberFormat {
                            token: field.to_string(),
                        };
                        log::error!("{}", e);
                        e
                    })?;
                    row.push(value);
                }
                rows.push(row);
            }
        }
        Err(e) => log::error!("{}", e),
    }

    let mut matrix = Matrix::from_rows(rows);
    matrix.set_name(path.display().to_string());
    Ok(matrix)
}
