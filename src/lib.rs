//! A small dense matrix type with a naive matrix multiply.
//!
//! [`Matrix<T>`] keeps its elements in one row-major buffer. [`multiply`]
//! is the textbook i-j-k triple loop: every output element is a dot product
//! accumulated in `f64` and narrowed back to `T`. No blocking, no SIMD, no
//! threads.
//!
//! ## Usage
//!
//! ```
//! use densemat::{matrix, multiply};
//!
//! let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]].unwrap();
//! let b = matrix![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]].unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, matrix![[58.0, 64.0], [139.0, 154.0]].unwrap());
//! ```
//!
//! Shapes that don't line up are an error, not a panic:
//!
//! ```
//! use densemat::{Matrix, MatrixError, multiply};
//!
//! let a = Matrix::<f64>::new(2, 3);
//! let b = Matrix::<f64>::new(2, 2);
//!
//! assert_eq!(
//!     multiply(&a, &b),
//!     Err(MatrixError::DimensionMismatch { left: (2, 3), right: (2, 2) })
//! );
//! ```

pub mod element;
pub mod error;
pub mod matrix;

pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;

use log::debug;

/// Matrix multiply: C = A * B
///
/// A is m×k, B is k×n, the result is a new m×n matrix. Neither input is
/// modified.
///
/// # Errors
///
/// [`MatrixError::DimensionMismatch`] if `a.cols() != b.rows()`.
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let (m, k) = a.shape();
    let n = b.cols();
    debug!("multiply {}x{} by {}x{}", m, k, k, n);

    let mut c = Matrix::new(m, n);
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), m, n, k);
    Ok(c)
}
