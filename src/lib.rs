//! matrix-algebra: a minimal dense-matrix value type and operation set.
//!
//! This crate provides the [`Matrix`](matrix::Matrix) value type (named
//! constructors, bound-checked access, column augmentation), a stateless
//! [`algebra`] module of pure operations over it, a canonical bracketed text
//! format with a strict parser, and CSV loading in both strict and
//! best-effort flavors.
//!
//! The design favors small, testable modules: matrices own their grid
//! outright, algebra never mutates its inputs, and every operation returns a
//! freshly built value.
pub mod algebra;
pub mod error;
pub mod io;
pub mod matrix;
pub mod parse;

pub use error::{Axis, MatrixError};
pub use matrix::Matrix;
