//! Error types for the median search.
//!
//! Element *types* are checked by the compiler, so the only failures left at
//! runtime are an input with nothing to take the median of, and element
//! *values* that have no ordering between them (such as `f64::NAN`).

use thiserror::Error;

/// Represents errors that can occur while computing a median.
///
/// # Examples
///
/// ```rust
/// use sorted_median::{MedianError, find_median};
///
/// let empty: [i32; 0] = [];
/// assert_eq!(find_median(&empty, &empty), Err(MedianError::EmptyInput));
///
/// let result = find_median(&[1.0, f64::NAN], &[2.0]);
/// assert_eq!(result, Err(MedianError::Incomparable));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MedianError {
    /// Both sequences were empty, so there is no middle element.
    #[error("cannot take the median of two empty sequences")]
    EmptyInput,

    /// Two compared elements could not be ordered against each other.
    #[error("encountered elements with no defined ordering")]
    Incomparable,
}
