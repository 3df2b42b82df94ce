//! Tagged edge values for partition cuts.
//!
//! A cut at the very start of a sequence has nothing on its left, and a cut at
//! the very end has nothing on its right. Rather than standing in for those
//! gaps with numeric constants such as `i32::MIN` or `f64::INFINITY` (which
//! may well be real data), the gap is its own variant that orders below or
//! above every element.
//!
//! # Examples
//!
//! ```rust
//! use sorted_median::Boundary;
//!
//! let sequence = [f64::NEG_INFINITY, 0.0, f64::INFINITY];
//!
//! assert_eq!(Boundary::left_of(&sequence, 0), Boundary::NegativeInfinity);
//! assert!(Boundary::NegativeInfinity < Boundary::left_of(&sequence, 1));
//! assert!(Boundary::right_of(&sequence, 2) < Boundary::PositiveInfinity);
//! ```

use std::cmp::Ordering;

use crate::MedianError;

/// One side of a partition cut: either a real element or an edge sentinel.
///
/// Variant order is significant. The derived `PartialOrd`/`Ord` place
/// `NegativeInfinity` below every `Element`, and `PositiveInfinity` above
/// every `Element`; two elements compare by their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Boundary<T> {
    /// No element to the left of a cut at index 0.
    NegativeInfinity,
    /// A real element adjacent to the cut.
    Element(T),
    /// No element to the right of a cut at the end of the sequence.
    PositiveInfinity,
}

impl<'a, T> Boundary<&'a T> {
    /// Returns the element immediately left of `cut`, or `NegativeInfinity`
    /// when `cut` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_median::Boundary;
    ///
    /// assert_eq!(Boundary::left_of(&[4, 5], 1), Boundary::Element(&4));
    /// assert_eq!(Boundary::left_of(&[4, 5], 0), Boundary::NegativeInfinity);
    /// ```
    #[inline]
    pub fn left_of(sequence: &'a [T], cut: usize) -> Self {
        cut.checked_sub(1)
            .and_then(|index| sequence.get(index))
            .map_or(Self::NegativeInfinity, Self::Element)
    }

    /// Returns the element immediately right of `cut`, or `PositiveInfinity`
    /// when `cut` is at (or past) the end of `sequence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_median::Boundary;
    ///
    /// assert_eq!(Boundary::right_of(&[4, 5], 1), Boundary::Element(&5));
    /// assert_eq!(Boundary::right_of(&[4, 5], 2), Boundary::PositiveInfinity);
    /// ```
    #[inline]
    pub fn right_of(sequence: &'a [T], cut: usize) -> Self {
        sequence
            .get(cut)
            .map_or(Self::PositiveInfinity, Self::Element)
    }
}

impl<T> Boundary<T> {
    /// Returns the contained element, or `None` for either sentinel.
    #[inline]
    pub fn into_element(self) -> Option<T> {
        match self {
            Self::Element(element) => Some(element),
            Self::NegativeInfinity | Self::PositiveInfinity => None,
        }
    }

    /// Returns `true` if this is a real element.
    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }
}

impl<T: PartialOrd> Boundary<T> {
    /// Compares two boundaries, failing when both are elements with no
    /// ordering between them.
    ///
    /// # Errors
    ///
    /// Returns [`MedianError::Incomparable`] if `partial_cmp` yields `None`.
    #[inline]
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, MedianError> {
        self.partial_cmp(other).ok_or(MedianError::Incomparable)
    }

    /// Returns the greater of two boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`MedianError::Incomparable`] if the two cannot be ordered.
    #[inline]
    pub fn try_max(self, other: Self) -> Result<Self, MedianError> {
        Ok(match self.try_cmp(&other)? {
            Ordering::Less => other,
            Ordering::Equal | Ordering::Greater => self,
        })
    }

    /// Returns the lesser of two boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`MedianError::Incomparable`] if the two cannot be ordered.
    #[inline]
    pub fn try_min(self, other: Self) -> Result<Self, MedianError> {
        Ok(match self.try_cmp(&other)? {
            Ordering::Greater => other,
            Ordering::Less | Ordering::Equal => self,
        })
    }
}
