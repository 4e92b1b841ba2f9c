use densemat::{Matrix, MatrixError, matrix, multiply};

#[test]
fn test_ragged_literal_rejected() {
    let err = Matrix::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InconsistentShape {
            row: 1,
            expected: 2,
            found: 1
        }
    );

    assert!(matches!(
        matrix![[1.0, 2.0], [3.0]],
        Err(MatrixError::InconsistentShape { .. })
    ));
    assert!(matches!(
        Matrix::try_from(vec![vec![1], vec![2, 3], vec![4]]),
        Err(MatrixError::InconsistentShape { row: 1, expected: 1, found: 2 })
    ));
}

#[test]
fn test_longer_later_row_rejected() {
    let err = matrix![[1, 2], [3, 4], [5, 6, 7]].unwrap_err();
    assert_eq!(
        err,
        MatrixError::InconsistentShape {
            row: 2,
            expected: 2,
            found: 3
        }
    );
}

#[test]
fn test_empty_literal_rejected() {
    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        Matrix::try_from(empty),
        Err(MatrixError::InvalidArgument(_))
    ));

    let from_macro: Result<Matrix<i32>, _> = matrix![];
    assert!(matches!(from_macro, Err(MatrixError::InvalidArgument(_))));
}

#[test]
fn test_flat_buffer_length_checked() {
    let err = Matrix::from_vec(2, 3, vec![1.0; 5]).unwrap_err();
    assert!(matches!(err, MatrixError::InvalidArgument(_)));

    assert!(Matrix::from_vec(usize::MAX, 2, vec![0u8; 2]).is_err());
    assert!(Matrix::<u8>::from_vec(0, 7, Vec::new()).is_ok());
}

#[test]
fn test_dimension_mismatch_leaves_inputs_untouched() {
    let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].unwrap();
    let b = matrix![[1.0, 2.0], [3.0, 4.0]].unwrap();
    let (a_before, b_before) = (a.clone(), b.clone());

    let err = multiply(&a, &b).unwrap_err();

    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            left: (2, 3),
            right: (2, 2)
        }
    );
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_index_out_of_range_reports_shape() {
    let m = Matrix::<f64>::new(2, 3);
    assert_eq!(
        m.get_checked(1, 3),
        Err(MatrixError::IndexOutOfRange {
            row: 1,
            col: 3,
            rows: 2,
            cols: 3
        })
    );
}

#[test]
fn test_error_messages() {
    let mismatch = MatrixError::DimensionMismatch {
        left: (2, 3),
        right: (2, 2),
    };
    assert_eq!(
        mismatch.to_string(),
        "matrix dimensions are not compatible for multiplication: (2, 3) * (2, 2)"
    );

    let ragged = MatrixError::InconsistentShape {
        row: 1,
        expected: 2,
        found: 1,
    };
    assert_eq!(
        ragged.to_string(),
        "inconsistent row length: row 1 has 1 elements, expected 2"
    );
}
