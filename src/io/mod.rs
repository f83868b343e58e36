//! File-boundary readers for matrix data.
pub mod csv;

pub use csv::{read_matrix, read_matrix_strict};
