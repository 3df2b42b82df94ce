//! Median of two sorted sequences.
//!
//! [`MedianFinder`] borrows two ascending slices and locates the middle of
//! their conceptual merge without merging them. The work is a binary search
//! over the shorter slice, so a one-element slice against a million-element
//! slice costs a single step.
//!
//! # Examples
//!
//! ```rust
//! use sorted_median::find_median;
//!
//! // merged: [1, 3, 3, 4, 7, 8]
//! assert_eq!(find_median(&[1, 3, 7, 8], &[3, 4]), Ok(3.5));
//! ```
//!
//! Element types only need `PartialOrd` to locate the middle:
//!
//! ```rust
//! use sorted_median::{MedianFinder, Middle};
//!
//! let finder = MedianFinder::new(&["apple", "fig"], &["kiwi"]);
//! assert_eq!(finder.middle(), Ok(Middle::Single(&"fig")));
//! ```

use crate::partition::{self, CutEdges};
use crate::{MedianError, Numeric, Partition, SearchStats};

/// The middle of a merged sequence.
///
/// An odd total has one middle element, an even total has two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Middle<T> {
    /// The single middle element of an odd-length merge.
    Single(T),
    /// The lower and upper middle elements of an even-length merge.
    Pair(T, T),
}

impl<T: Numeric> Middle<T> {
    /// Converts the middle element(s) into the median.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_median::Middle;
    ///
    /// assert_eq!(Middle::Single(4).to_median(), 4.0);
    /// assert_eq!(Middle::Pair(3, 4).to_median(), 3.5);
    /// ```
    #[inline]
    pub fn to_median(&self) -> f64 {
        match self {
            Self::Single(middle) => middle.to_f64(),
            Self::Pair(lower, upper) => T::midpoint(lower, upper),
        }
    }
}

/// Computes the median of two sorted sequences by partition search.
///
/// Both slices must be sorted ascending; this is not checked, and the result
/// for unsorted input is unspecified.
///
/// The finder only borrows its inputs. Which slice plays the "shorter" role
/// is decided once, by rebinding the two references.
#[derive(Debug)]
pub struct MedianFinder<'a, T> {
    shorter: &'a [T],
    longer: &'a [T],
}

impl<T> Clone for MedianFinder<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MedianFinder<'_, T> {}

static_assertions::assert_impl_all!(MedianFinder<'static, i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(MedianFinder<'static, f64>: Send, Sync, Copy);

impl<'a, T> MedianFinder<'a, T> {
    /// Creates a finder over two sorted slices.
    ///
    /// The argument order never affects the result. When the lengths are
    /// equal, `first` plays the shorter role.
    #[inline]
    pub const fn new(first: &'a [T], second: &'a [T]) -> Self {
        if first.len() <= second.len() {
            Self {
                shorter: first,
                longer: second,
            }
        } else {
            Self {
                shorter: second,
                longer: first,
            }
        }
    }

    /// Total number of elements across both slices.
    #[inline]
    pub const fn total_len(&self) -> usize {
        self.shorter.len() + self.longer.len()
    }

    /// Returns `true` if both slices are empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

impl<'a, T: PartialOrd> MedianFinder<'a, T> {
    /// Searches for the median partition.
    ///
    /// `cut_a` of the returned partition indexes the shorter slice.
    ///
    /// # Errors
    ///
    /// Returns [`MedianError::EmptyInput`] if both slices are empty, and
    /// [`MedianError::Incomparable`] if two compared elements cannot be ordered.
    pub fn partition(&self) -> Result<(Partition, SearchStats), MedianError> {
        partition::search(self.shorter, self.longer)
    }

    /// Locates the middle element(s) of the merged sequence.
    ///
    /// # Errors
    ///
    /// See [`MedianFinder::partition`].
    pub fn middle(&self) -> Result<Middle<&'a T>, MedianError> {
        self.middle_with_stats().map(|(middle, _)| middle)
    }

    /// Locates the middle element(s) and reports how many search steps it took.
    ///
    /// # Errors
    ///
    /// See [`MedianFinder::partition`].
    pub fn middle_with_stats(&self) -> Result<(Middle<&'a T>, SearchStats), MedianError> {
        let (partition, stats) = self.partition()?;
        let edges = CutEdges::at(self.shorter, self.longer, partition);

        // The left side holds ceil(total / 2) >= 1 elements, and for an even
        // total the right side holds total / 2 >= 1, so neither side can be
        // all sentinels.
        let Some(max_left) = edges.left_a.try_max(edges.left_b)?.into_element() else {
            unreachable!("left side of a partition of non-empty input has an element");
        };

        if self.total_len() % 2 == 1 {
            return Ok((Middle::Single(max_left), stats));
        }

        let Some(min_right) = edges.right_a.try_min(edges.right_b)?.into_element() else {
            unreachable!("right side of an even partition has an element");
        };

        Ok((Middle::Pair(max_left, min_right), stats))
    }
}

impl<T: PartialOrd + Numeric> MedianFinder<'_, T> {
    /// Computes the median.
    ///
    /// # Errors
    ///
    /// See [`MedianFinder::partition`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_median::MedianFinder;
    ///
    /// assert_eq!(MedianFinder::new(&[1, 2], &[3, 4]).median(), Ok(2.5));
    /// ```
    pub fn median(&self) -> Result<f64, MedianError> {
        self.middle().map(|middle| middle.to_median())
    }

    /// Computes the median and reports how many steps the search took.
    ///
    /// # Errors
    ///
    /// See [`MedianFinder::partition`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_median::MedianFinder;
    ///
    /// let long: Vec<u32> = (0..1_000_000).collect();
    /// let (median, stats) = MedianFinder::new(&[7], &long).median_with_stats().unwrap();
    ///
    /// assert_eq!(median, 499_999.0);
    /// assert!(stats.iterations <= 2);
    /// ```
    pub fn median_with_stats(&self) -> Result<(f64, SearchStats), MedianError> {
        self.middle_with_stats()
            .map(|(middle, stats)| (middle.to_median(), stats))
    }
}

/// Computes the median of two sorted sequences.
///
/// Shorthand for `MedianFinder::new(first, second).median()`.
///
/// # Errors
///
/// Returns [`MedianError::EmptyInput`] if both slices are empty, and
/// [`MedianError::Incomparable`] if two compared elements cannot be ordered.
///
/// # Examples
///
/// ```rust
/// use sorted_median::find_median;
///
/// assert_eq!(find_median(&[1, 3], &[2]), Ok(2.0));
/// assert_eq!(find_median(&[], &[1, 2]), Ok(1.5));
/// ```
pub fn find_median<T: PartialOrd + Numeric>(first: &[T], second: &[T]) -> Result<f64, MedianError> {
    MedianFinder::new(first, second).median()
}

/// Computes the median of a single sorted sequence.
///
/// # Errors
///
/// Returns [`MedianError::EmptyInput`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use sorted_median::median_of_sorted;
///
/// assert_eq!(median_of_sorted(&[1, 2, 3]), Ok(2.0));
/// assert_eq!(median_of_sorted(&[1, 2, 3, 4]), Ok(2.5));
/// ```
pub fn median_of_sorted<T: Numeric>(sequence: &[T]) -> Result<f64, MedianError> {
    let half = sequence.len() / 2;
    if sequence.len() % 2 == 1 {
        Ok(sequence[half].to_f64())
    } else {
        match (half.checked_sub(1).and_then(|lower| sequence.get(lower)), sequence.get(half)) {
            (Some(lower), Some(upper)) => Ok(T::midpoint(lower, upper)),
            _ => Err(MedianError::EmptyInput),
        }
    }
}
