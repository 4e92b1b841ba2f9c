use log::trace;

use crate::element::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. Each output element is
/// one dot product, summed left to right over `p` in an `f64` accumulator
/// and narrowed to `T` when stored, so results don't depend on anything but
/// the inputs.
///
/// `c` is overwritten, not accumulated into (C = A * B).
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    n: usize,
    k: usize,
) {
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..k {
                sum += a[i * k + p].widened_product(b[p * n + j]);
            }
            c[i * n + j] = T::from_f64(sum);
        }
        trace!("row {} of {} done", i + 1, m);
    }
}
