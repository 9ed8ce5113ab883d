#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A growable array with doubling storage growth and an in-place quicksort.
//!
//! [`GrowableArray`] keeps its elements in one contiguous, owned block of
//! memory. When an insertion needs one more slot than is allocated, the block
//! is replaced by one twice its size, so appending is amortized O(1).
//! Positional insertion and removal shift the affected tail, preserving the
//! order of all other elements.
//!
//! Fallible operations return a [`Result`] carrying an [`Error`]; every
//! `try_*` method has a panicking counterpart without the prefix. The one
//! exception is [`remove_range`](GrowableArray::remove_range), which silently
//! ignores ranges that do not fit inside the array.
//!
//! Sorting uses a last-element-pivot quicksort (see the [`sort`] module),
//! which is **not** stable and degrades to O(n²) on already sorted input.
//!
//! # Features
//! - `std`: implements `std::error::Error` for [`Error`].
//! - `logging`: reports allocations and storage growth through the `log` crate.

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

pub mod array;
pub mod sort;
pub mod storage;

#[cfg(test)]
mod test_utils;

pub use crate::array::{GrowableArray, DEFAULT_CAPACITY};

use core::fmt;

/// The error type for fallible [`GrowableArray`] operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// An element index was outside the valid range.
    ///
    /// Reading or writing requires `index < len`, while inserting requires
    /// `index <= len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the array at the time of the call.
        len: usize,
    },
    /// The backing storage could not be allocated or grown.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index (is {}) out of range for length {}", index, len)
            }
            Error::AllocFailed => f.write_str("failed to allocate storage"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Shorthand for `core::result::Result<T, growable::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
