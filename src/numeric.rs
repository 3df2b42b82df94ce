//! Conversion of sequence elements into the floating-point median.
//!
//! The partition search itself only needs `PartialOrd`. Turning the middle
//! element (or the two middle elements) into a median needs arithmetic, and
//! the median of two integers may be a half, so every element type is
//! widened to `f64` first. The average is taken with `f64::midpoint`, so two
//! large integers never overflow and two subnormal floats keep their value.
//!
//! # Examples
//!
//! ```rust
//! use sorted_median::Numeric;
//!
//! assert_eq!(3_u8.to_f64(), 3.0);
//! assert_eq!((-2_i64).to_f64(), -2.0);
//! assert_eq!(Numeric::midpoint(&i32::MAX, &i32::MAX), f64::from(i32::MAX));
//! ```

/// A type whose values can be widened to `f64` for averaging.
///
/// Implemented for every primitive integer and floating-point type. Integers
/// wider than 53 bits convert to the nearest representable `f64`.
///
/// # Examples
///
/// ```rust
/// use sorted_median::{Numeric, find_median};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Celsius(f32);
///
/// impl Numeric for Celsius {
///     fn to_f64(&self) -> f64 {
///         f64::from(self.0)
///     }
/// }
///
/// let morning = [Celsius(11.0), Celsius(14.0)];
/// let evening = [Celsius(12.0)];
/// assert_eq!(find_median(&morning, &evening), Ok(12.0));
/// ```
pub trait Numeric {
    /// Widens the value to `f64`.
    fn to_f64(&self) -> f64;

    /// Returns the arithmetic mean of two values as `f64`.
    #[inline]
    fn midpoint(first: &Self, second: &Self) -> f64 {
        f64::midpoint(first.to_f64(), second.to_f64())
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn to_f64(&self) -> f64 {
        (**self).to_f64()
    }
}

macro_rules! impl_numeric_lossless {
    ($($numeric_type:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric_type {
                #[inline]
                fn to_f64(&self) -> f64 {
                    f64::from(*self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_rounding {
    ($($numeric_type:ty),* $(,)?) => {
        $(
            impl Numeric for $numeric_type {
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_numeric_rounding!(i64, i128, isize, u64, u128, usize);
