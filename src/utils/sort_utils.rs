use crate::{DigitKey, SortError};
use std::fmt::Display;

/// Number of buckets in a decimal counting pass.
pub const RADIX: usize = 10;

#[inline]
pub fn get_max<T>(bucket: &[T]) -> Option<T>
where
    T: DigitKey,
{
    let (first, rest) = bucket.split_first()?;
    let mut max = *first;

    for v in rest {
        if *v > max {
            max = *v;
        }
    }

    Some(max)
}

#[inline]
pub fn find_negative<T>(bucket: &[T]) -> Option<usize>
where
    T: DigitKey,
{
    bucket.iter().position(|v| v.is_negative())
}

#[inline]
pub fn get_digit_counts<T>(bucket: &[T], place: T) -> Result<[usize; RADIX], SortError>
where
    T: DigitKey,
{
    let mut counts = [0usize; RADIX];

    for (index, item) in bucket.iter().enumerate() {
        if item.is_negative() {
            return Err(SortError::NegativeKey { index });
        }

        counts[item.digit(place)] += 1;
    }

    Ok(counts)
}

/// After this, `sums[d]` is the number of items whose digit is `<= d`, which
/// is one past the last output slot for digit `d`.
#[inline]
pub fn get_cumulative_counts(counts: &[usize; RADIX]) -> [usize; RADIX] {
    let mut sums = *counts;

    for d in 1..RADIX {
        sums[d] += sums[d - 1];
    }

    sums
}

/// Reserves the scratch buffer for a counting pass without aborting on
/// exhaustion. The buffer starts as a copy of `bucket` so every slot is
/// initialized; the scatter overwrites all of it.
#[inline]
pub fn get_tmp_bucket<T>(bucket: &[T]) -> Result<Vec<T>, SortError>
where
    T: Copy,
{
    let mut tmp_bucket = Vec::new();
    tmp_bucket
        .try_reserve_exact(bucket.len())
        .map_err(|_| SortError::AllocationFailed { len: bucket.len() })?;
    tmp_bucket.extend_from_slice(bucket);

    Ok(tmp_bucket)
}

/// Renders a bucket as `a, b, c`.
pub fn format_array<T>(bucket: &[T]) -> String
where
    T: Display,
{
    let mut out = String::new();

    for (i, v) in bucket.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&v.to_string());
    }

    out
}
