//! # lsd-radix
//!
//! lsd-radix is a native Rust implementation of stable, in-place, decimal least-significant-digit
//! radix sort for non-negative integers.
//!
//! ## Usage
//!
//! In the simplest case, you can use this sort by calling `my_vec.radix_sort()`. The sort runs one
//! counting pass per decimal digit of the largest value, starting from the units place.
//!
//! ```
//! use lsd_radix::RadixSort;
//!
//! let mut values = vec![5, 4, 3, 2, 1];
//! values.radix_sort().unwrap();
//!
//! assert_eq!(values, [1, 2, 3, 4, 5]);
//! ```
//!
//! ## Supported keys
//!
//! `DigitKey` is implemented for every primitive integer type:
//!
//!  * `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//!  * `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//!
//! Signed types are accepted, but only non-negative values can be sorted. A negative value makes
//! the sort return `SortError::NegativeKey` without modifying the data.
//!
//! ## Observing passes
//!
//! The builder can attach an observer that sees the data after every digit pass. This is handy for
//! debugging or for teaching how the algorithm progresses.
//!
//! ```
//! use lsd_radix::RadixSort;
//!
//! let mut values = vec![170, 45, 75, 90, 802, 24, 2, 66];
//! let mut passes = Vec::new();
//!
//! values
//!     .radix_sort_builder()
//!     .on_pass(|info, bucket| passes.push((info.place, bucket.to_vec())))
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(passes.len(), 3);
//! assert_eq!(passes[0], (1, vec![170, 90, 802, 2, 24, 45, 75, 66]));
//! ```
//!
//! `radix_sort_builder().with_printing()` prints every intermediate state to stdout, and
//! `observers::LogObserver` sends it to the `log` facade instead.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


mod digit_key;
mod digit_key_impl;
mod error;
pub mod observer;
pub mod observers;
mod radix_sort;
mod radix_sort_builder;
mod sorter;
pub mod sorts;
pub mod utils;

#[cfg(test)]
pub(crate) use utils::test_utils;

pub use digit_key::DigitKey;
pub use error::SortError;
pub use observer::{PassInfo, PassObserver};
pub use radix_sort::{radix_sort, RadixSort};
pub use radix_sort_builder::RadixSortBuilder;
pub use sorter::Sorter;
