use crate::radix_sort_builder::RadixSortBuilder;
use crate::{DigitKey, SortError};

pub trait RadixSort<T> {
    /// radix_sort runs a stable decimal LSD radix sort over your `Vec<T>` or `[T]`.
    ///
    /// ```
    /// use lsd_radix::RadixSort;
    ///
    /// let mut values = [170, 45, 75, 90, 802, 24, 2, 66];
    /// values.radix_sort().unwrap();
    ///
    /// assert_eq!(values, [2, 24, 45, 66, 75, 90, 170, 802]);
    /// ```
    fn radix_sort(&mut self) -> Result<(), SortError>;

    fn radix_sort_builder(&'_ mut self) -> RadixSortBuilder<'_, T>;
}

impl<T> RadixSort<T> for Vec<T>
where
    T: DigitKey,
{
    fn radix_sort(&mut self) -> Result<(), SortError> {
        self.radix_sort_builder().sort()
    }

    fn radix_sort_builder(&'_ mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}

impl<T> RadixSort<T> for [T]
where
    T: DigitKey,
{
    fn radix_sort(&mut self) -> Result<(), SortError> {
        self.radix_sort_builder().sort()
    }

    fn radix_sort_builder(&'_ mut self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}

/// Sorts `bucket` ascending in place. Slices shorter than 2 are left alone.
#[inline]
pub fn radix_sort<T>(bucket: &mut [T]) -> Result<(), SortError>
where
    T: DigitKey,
{
    bucket.radix_sort()
}
