//! Numeric element types a [`Matrix`](crate::Matrix) can hold.
//!
//! The multiply accumulates every dot product in `f64` and narrows the sum
//! back to the element type on store, so each element type only has to say
//! how it widens and narrows.

use num_traits::Zero;
use std::fmt::Debug;

/// A numeric matrix element.
///
/// `from_f64` uses `as` semantics: integers truncate toward zero and
/// saturate at their bounds (NaN becomes 0), `f32` rounds to nearest.
pub trait Element: Copy + Zero + PartialEq + Debug {
    /// Narrows an accumulated sum back to the element type.
    fn from_f64(value: f64) -> Self;

    /// One term of a dot product, widened to the `f64` accumulator.
    fn widened_product(self, rhs: Self) -> f64;
}

// Floats multiply in their own precision, then widen.
macro_rules! impl_float_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn widened_product(self, rhs: Self) -> f64 {
                (self * rhs) as f64
            }
        }
    )*};
}

// Integers multiply in their own type while the product fits, so large
// 64-bit operands aren't rounded first. On overflow both operands widen.
macro_rules! impl_int_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn widened_product(self, rhs: Self) -> f64 {
                self.checked_mul(rhs)
                    .map_or_else(|| self as f64 * rhs as f64, |p| p as f64)
            }
        }
    )*};
}

impl_float_element!(f32, f64);
impl_int_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
