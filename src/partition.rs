//! Binary search for the median partition of two sorted sequences.
//!
//! A partition cuts each sequence in two so that the combined left side holds
//! `ceil(total / 2)` elements. It is *valid* when nothing on the left is
//! greater than anything on the right, which for sorted inputs reduces to two
//! comparisons across the cuts:
//!
//! ```text
//!   shorter:  .. left_a | right_a ..
//!   longer:   .. left_b | right_b ..
//!
//!   valid  <=>  left_a <= right_b  &&  left_b <= right_a
//! ```
//!
//! Only the cut in the shorter sequence is searched; the other cut follows
//! from the required left-side size. The predicate is monotonic in `cut_a`,
//! so the search takes at most `floor(log2(shorter.len() + 1)) + 1` steps.

use std::cmp::Ordering;

use crate::{Boundary, MedianError};

/// The cut indices of a median partition.
///
/// `cut_a` counts the leading elements of the *shorter* sequence placed on
/// the left side, `cut_b` those of the longer one. When the sequences have
/// equal length, the first argument plays the shorter role.
///
/// # Examples
///
/// ```rust
/// use sorted_median::{MedianFinder, Partition};
///
/// let (partition, _) = MedianFinder::new(&[1, 3, 7, 8], &[3, 4]).partition().unwrap();
/// assert_eq!(partition, Partition { cut_a: 1, cut_b: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Number of elements of the shorter sequence left of the cut.
    pub cut_a: usize,
    /// Number of elements of the longer sequence left of the cut.
    pub cut_b: usize,
}

impl Partition {
    /// Total number of elements on the left side.
    #[inline]
    pub const fn left_len(&self) -> usize {
        self.cut_a + self.cut_b
    }
}

/// Instrumentation collected while searching for a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of candidate cuts examined. Zero when one sequence is empty.
    pub iterations: usize,
}

/// The four elements adjacent to a pair of cuts.
#[derive(Debug)]
pub(crate) struct CutEdges<'a, T> {
    pub(crate) left_a: Boundary<&'a T>,
    pub(crate) right_a: Boundary<&'a T>,
    pub(crate) left_b: Boundary<&'a T>,
    pub(crate) right_b: Boundary<&'a T>,
}

impl<'a, T> CutEdges<'a, T> {
    pub(crate) fn at(shorter: &'a [T], longer: &'a [T], partition: Partition) -> Self {
        Self {
            left_a: Boundary::left_of(shorter, partition.cut_a),
            right_a: Boundary::right_of(shorter, partition.cut_a),
            left_b: Boundary::left_of(longer, partition.cut_b),
            right_b: Boundary::right_of(longer, partition.cut_b),
        }
    }
}

/// Finds the median partition of `shorter` and `longer`.
///
/// `shorter.len() <= longer.len()` must hold, and both must be sorted
/// ascending. Unsorted input still terminates without panicking, returning
/// the last candidate partition.
///
/// # Errors
///
/// Returns [`MedianError::EmptyInput`] if both sequences are empty, and
/// [`MedianError::Incomparable`] if two compared elements cannot be ordered.
pub(crate) fn search<T: PartialOrd>(
    shorter: &[T],
    longer: &[T],
) -> Result<(Partition, SearchStats), MedianError> {
    debug_assert!(shorter.len() <= longer.len());

    if longer.is_empty() {
        return Err(MedianError::EmptyInput);
    }

    let half_len = (shorter.len() + longer.len()).div_ceil(2);

    if shorter.is_empty() {
        return Ok((
            Partition {
                cut_a: 0,
                cut_b: half_len,
            },
            SearchStats::default(),
        ));
    }

    let mut stats = SearchStats::default();
    let mut low = 0;
    let mut high = shorter.len();
    let mut partition = Partition {
        cut_a: 0,
        cut_b: half_len,
    };

    while low <= high {
        let cut_a = low + (high - low) / 2;
        partition = Partition {
            cut_a,
            cut_b: half_len - cut_a,
        };
        stats.iterations += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(cut_a, cut_b = partition.cut_b, low, high, "probing partition");

        let edges = CutEdges::at(shorter, longer, partition);

        // A sentinel on the offending side can never compare greater, so
        // `cut_a - 1` and `cut_a + 1` stay within `0..=shorter.len()`.
        if edges.left_a.try_cmp(&edges.right_b)? == Ordering::Greater {
            let Some(next_high) = cut_a.checked_sub(1) else {
                break;
            };
            high = next_high;
        } else if edges.left_b.try_cmp(&edges.right_a)? == Ordering::Greater {
            low = cut_a + 1;
        } else {
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        cut_a = partition.cut_a,
        cut_b = partition.cut_b,
        iterations = stats.iterations,
        "partition search finished"
    );

    Ok((partition, stats))
}
