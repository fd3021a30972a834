//! `counting_sort` is a stable, out-of-place counting sort on a single decimal digit. It is the
//! building block the radix sort driver runs once per digit place.
//!
//! The input is counted into ten buckets, the counts are turned into cumulative end offsets, and
//! the input is then walked from right to left placing every item at the end of its bucket's
//! remaining space. Walking right to left is what keeps items with the same digit in their
//! original relative order.
//!
//! All fallible work (reserving the scratch buffer and validating keys) happens before anything
//! is written back, so a failed pass leaves the input exactly as it was.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * lsb-first (one digit per call)

use crate::utils::*;
use crate::{DigitKey, SortError};
use log::trace;

pub fn counting_sort<T>(bucket: &mut [T], place: T) -> Result<(), SortError>
where
    T: DigitKey,
{
    if bucket.is_empty() {
        return Ok(());
    }

    trace!("counting pass over {} items", bucket.len());

    let mut tmp_bucket = get_tmp_bucket(bucket)?;
    let counts = get_digit_counts(bucket, place)?;
    let mut ends = get_cumulative_counts(&counts);

    for item in bucket.iter().rev() {
        let d = item.digit(place);
        ends[d] -= 1;
        tmp_bucket[ends[d]] = *item;
    }

    bucket.copy_from_slice(&tmp_bucket);

    Ok(())
}
