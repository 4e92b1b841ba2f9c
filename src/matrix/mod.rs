//! The dense matrix container and the naive multiply kernel behind it.
//!
//! A [`Matrix`] is one contiguous row-major buffer: element `(r, c)` lives at
//! offset `r * cols + c`. The buffer length is fixed at construction and is
//! always `rows * cols`.

pub mod naive_ijk;

use std::ops::{Index, IndexMut};

use log::debug;

use crate::element::Element;
use crate::error::{MatrixError, Result};

/// A dense, row-major 2D array of numeric elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Creates a `rows × cols` matrix with every element set to zero.
    ///
    /// Zero rows or zero columns are fine and give an empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("{}x{} matrix overflows usize", rows, cols));
        debug!("new {}x{} zero matrix", rows, cols);
        Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        }
    }

    /// Builds a matrix from a list of rows.
    ///
    /// The row count is `rows.len()` and the column count is the length of
    /// the first row. Every other row must have that same length.
    ///
    /// ```
    /// use densemat::{Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 0), 4.0);
    ///
    /// let ragged = Matrix::from_rows(&[vec![1, 2], vec![3]]);
    /// assert!(matches!(ragged, Err(MatrixError::InconsistentShape { row: 1, .. })));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or_else(|| {
            MatrixError::InvalidArgument("cannot build a matrix from an empty row list".into())
        })?;
        let cols = first.as_ref().len();

        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != cols)
        {
            return Err(MatrixError::InconsistentShape {
                row: i,
                expected: cols,
                found: row.as_ref().len(),
            });
        }
        let data: Vec<T> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        debug!("matrix {}x{} from rows", rows.len(), cols);
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Wraps a flat row-major buffer. `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::InvalidArgument(format!(
                "buffer of length {} does not fit a {}x{} matrix",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Reads element `(r, c)`.
    ///
    /// Only the flat offset `r * cols + c` is checked, not each axis: a
    /// column past `cols` reads from the next row. Use
    /// [`get_checked`](Self::get_checked) to validate both indices.
    ///
    /// # Panics
    ///
    /// Panics if the flat offset is past the end of the buffer.
    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.offset(r, c)]
    }

    /// Writes element `(r, c)`. Same addressing rules as [`get`](Self::get).
    #[inline(always)]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        let offset = self.offset(r, c);
        self.data[offset] = value;
    }

    /// Reads element `(r, c)` after checking both indices.
    ///
    /// # Errors
    ///
    /// [`MatrixError::IndexOutOfRange`] if `r >= rows` or `c >= cols`.
    pub fn get_checked(&self, r: usize, c: usize) -> Result<T> {
        self.check_index(r, c)?;
        Ok(self.get(r, c))
    }

    /// Writes element `(r, c)` after checking both indices. Fails like
    /// [`get_checked`](Self::get_checked) and leaves the matrix unchanged.
    pub fn set_checked(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        self.check_index(r, c)?;
        self.set(r, c, value);
        Ok(())
    }

    /// Matrix product `self × rhs`. See [`crate::multiply`].
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        crate::multiply(self, rhs)
    }

    fn check_index(&self, r: usize, c: usize) -> Result<()> {
        if r >= self.rows || c >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row: r,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline(always)]
    fn offset(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }
}

impl<T: Element> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows.as_slice())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[self.offset(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        let offset = self.offset(r, c);
        &mut self.data[offset]
    }
}

/// Builds a [`Matrix`] from nested row literals, returning
/// `Result<Matrix<T>, MatrixError>` exactly like [`Matrix::from_rows`].
///
/// ```
/// use densemat::matrix;
///
/// let m = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
///
/// assert!(matrix![[1, 2], [3]].is_err());
/// ```
#[macro_export]
macro_rules! matrix {
    () => {
        $crate::Matrix::from_rows::<&[_]>(&[])
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_rows(&[$(&[$($x),*][..]),+])
    };
}
