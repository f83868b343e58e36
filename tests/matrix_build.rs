use matrix_algebra::{Axis, Matrix, MatrixError};

/// 3x3 fixture counting up from 1, row by row.
fn fixture() -> Matrix {
    Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
}

#[test]
fn zeros_has_requested_shape_and_all_zero_cells() {
    let m = Matrix::zeros(4, 2);
    assert_eq!(m.row_count(), 4);
    assert_eq!(m.column_count().expect("matrix has rows"), 2);
    for i in 0..4 {
        for j in 0..2 {
            assert_eq!(m.get(i, j).expect("in bounds"), 0.0);
        }
    }
    assert_eq!(m.name(), "zero (4, 2) matrix");
}

#[test]
fn from_elem_fills_every_cell() {
    let m = Matrix::from_elem(2, 3, 7.5);
    assert_eq!(m.shape(), (2, 3));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(m.get(i, j).expect("in bounds"), 7.5);
        }
    }
}

#[test]
fn identity_is_square_with_unit_diagonal() {
    let identity = Matrix::identity(3);
    assert!(identity.is_square());
    assert_eq!(identity.name(), "I3");
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(identity.get(i, j).expect("in bounds"), expected);
        }
    }
}

#[test]
fn identity_zero_is_an_empty_square_matrix() {
    let identity = Matrix::identity(0);
    assert_eq!(identity.row_count(), 0);
    assert!(identity.is_square());
}

#[test]
fn row_returns_stored_values() {
    let m = fixture();
    assert_eq!(m.row(0).expect("in bounds"), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(2).expect("in bounds"), &[7.0, 8.0, 9.0]);
}

#[test]
fn column_is_computed_from_every_row() {
    let m = fixture();
    assert_eq!(m.column(0).expect("in bounds"), vec![1.0, 4.0, 7.0]);
    assert_eq!(m.column(2).expect("in bounds"), vec![3.0, 6.0, 9.0]);
}

#[test]
fn row_access_past_the_end_fails() {
    let m = fixture();
    assert_eq!(
        m.row(3).unwrap_err(),
        MatrixError::IndexOutOfBounds {
            axis: Axis::Row,
            index: 3,
            len: 3,
        }
    );
}

#[test]
fn column_access_past_the_end_fails() {
    let m = fixture();
    assert_eq!(
        m.column(3).unwrap_err(),
        MatrixError::IndexOutOfBounds {
            axis: Axis::Column,
            index: 3,
            len: 3,
        }
    );
}

#[test]
fn get_checks_both_axes() {
    let m = fixture();
    assert_eq!(m.get(1, 1).expect("in bounds"), 5.0);
    assert!(matches!(
        m.get(9, 0),
        Err(MatrixError::IndexOutOfBounds { axis: Axis::Row, .. })
    ));
    assert!(matches!(
        m.get(0, 9),
        Err(MatrixError::IndexOutOfBounds {
            axis: Axis::Column,
            ..
        })
    ));
}

// A zero-row matrix has no first row to read the column count from, so the
// query fails exactly like `row(0)` instead of reporting 0.
#[test]
fn column_count_on_zero_row_matrix_fails_like_row_zero() {
    let empty = Matrix::zeros(0, 5);
    assert_eq!(
        empty.column_count().unwrap_err(),
        MatrixError::IndexOutOfBounds {
            axis: Axis::Row,
            index: 0,
            len: 0,
        }
    );
    assert_eq!(empty.shape(), (0, 0));
}

#[test]
fn zero_width_rows_are_legal() {
    let m = Matrix::zeros(3, 0);
    assert_eq!(m.row_count(), 3);
    assert_eq!(m.column_count().expect("matrix has rows"), 0);
    assert!(!m.is_square());
}

#[test]
fn is_square_compares_shape_only() {
    assert!(fixture().is_square());
    assert!(!Matrix::zeros(3, 4).is_square());
}

#[test]
fn augment_appends_the_coefficient_column_in_order() {
    let m = fixture();
    let augmented = m.augment_column(&[5.0, 3.0, 6.0]).expect("sizes match");

    assert_eq!(augmented.shape(), (3, 4));
    assert_eq!(augmented.column(3).expect("in bounds"), vec![5.0, 3.0, 6.0]);
    // original columns are untouched
    for j in 0..3 {
        assert_eq!(
            augmented.column(j).expect("in bounds"),
            m.column(j).expect("in bounds")
        );
    }
    assert_eq!(augmented.name(), "augmented_matrix");
}

#[test]
fn augment_rejects_a_short_coefficient_column() {
    let m = fixture();
    assert_eq!(
        m.augment_column(&[5.0, 3.0]).unwrap_err(),
        MatrixError::ColumnSizeMismatch {
            column_len: 2,
            row_count: 3,
        }
    );
}

#[test]
fn set_name_replaces_the_label() {
    let mut m = fixture();
    assert_eq!(m.name(), "matrix");
    m.set_name("coefficients");
    assert_eq!(m.name(), "coefficients");
}
