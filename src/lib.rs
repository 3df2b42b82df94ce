//! # sorted-median
//!
//! Median of two sorted sequences in logarithmic time, without merging them.
//!
//! ## Overview
//!
//! Given two ascending sequences, the median of their merge is determined by
//! a single pair of cut points: one in each sequence, such that the left side
//! of both cuts holds half of all elements (rounded up) and nothing on the
//! left exceeds anything on the right. The cut in the shorter sequence is
//! found by binary search, so the cost is `O(log(min(len_a, len_b)))`.
//!
//! - [`find_median`] / [`MedianFinder`]: the partition search
//! - [`Middle`]: the middle element(s), for any `PartialOrd` element type
//! - [`Boundary`]: tagged edge sentinels at sequence ends
//! - [`Numeric`]: widening of elements to `f64`
//! - [`MedianError`]: empty or unordered input
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `trace`/`debug` events from the partition search
//! - `serde`: `Serialize`/`Deserialize` for [`Partition`] and [`SearchStats`]
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_median::prelude::*;
//!
//! assert_eq!(find_median(&[1, 3, 7, 8], &[3, 4]), Ok(3.5));
//!
//! let (partition, stats) = MedianFinder::new(&[1, 3, 7, 8], &[3, 4]).partition().unwrap();
//! assert_eq!(partition.left_len(), 3);
//! assert!(stats.iterations <= 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_median::prelude::*;
/// ```
pub mod prelude {
    pub use crate::boundary::Boundary;
    pub use crate::error::MedianError;
    pub use crate::median::{MedianFinder, Middle, find_median, median_of_sorted};
    pub use crate::numeric::Numeric;
    pub use crate::partition::{Partition, SearchStats};
}

pub mod boundary;
pub mod error;
pub mod median;
pub mod numeric;
pub mod partition;

pub use boundary::Boundary;
pub use error::MedianError;
pub use median::{MedianFinder, Middle, find_median, median_of_sorted};
pub use numeric::Numeric;
pub use partition::{Partition, SearchStats};
