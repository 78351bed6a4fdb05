#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use num_range::NumRange;
//!
//! // Count from 0 up to (but not including) 10 (defaults to f64 elements)
//! let range = NumRange::up_to(10.0);
//!
//! assert_eq!(range.len(), 10);
//! assert_eq!(range.at(0), Some(0.0));
//! assert_eq!(range.at(-1), Some(9.0));
//! assert_eq!(range.index_of(7.0), Some(7));
//! assert!(range.contains(0.0));
//! assert!(!range.contains(10.0)); // stop is excluded
//!
//! // Iterate over the range
//! for value in &range {
//!     println!("{}", value);
//! }
//! ```
//!
//! # Construction
//!
//! The builder mirrors a configuration object: `start` defaults to 0, `step`
//! to 1, and `stop` is required. Construction is the only fallible surface of
//! the crate; every query on a built range is total.
//!
//! ```rust
//! use num_range::{NumRange, RangeError};
//!
//! let range = NumRange::builder().stop(10.0).step(3.0).build()?;
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![0.0, 3.0, 6.0, 9.0]);
//!
//! // Forgetting stop or passing a zero step is rejected
//! assert_eq!(
//!     NumRange::<f64>::builder().start(5.0).build().unwrap_err(),
//!     RangeError::MissingStop
//! );
//! assert_eq!(
//!     NumRange::builder().stop(10.0).step(0.0).build().unwrap_err(),
//!     RangeError::InvalidStep
//! );
//! # Ok::<(), num_range::RangeError>(())
//! ```
//!
//! # Element Type Support
//!
//! `NumRange` supports `f32` and `f64` elements, with `f64` the default:
//!
//! ```rust
//! use num_range::NumRange;
//!
//! let range = NumRange::<f32>::new(1.0, 2.0, 0.25).unwrap();
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![1.0, 1.25, 1.5, 1.75]);
//! ```
//!
//! # Restartable Traversal
//!
//! The range holds no cursor; each [`NumRange::iter`] call (or `IntoIterator`
//! use) starts an independent traversal:
//!
//! ```rust
//! use num_range::NumRange;
//!
//! let range = NumRange::up_to(3.0);
//! let mut a = range.iter();
//! let mut b = range.iter();
//! assert_eq!(a.next(), Some(0.0));
//! assert_eq!(a.next(), Some(1.0));
//! assert_eq!(b.next(), Some(0.0));
//! ```

mod num_range;

pub use num_range::{NumRange, NumRangeBuilder, NumRangeIter, RangeError, RangeNum};

#[cfg(test)]
#[path = "tests/num_range_tests.rs"]
mod tests;
