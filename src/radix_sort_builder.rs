use crate::observer::{PassInfo, PassObserver};
use crate::observers::{NoopObserver, PrintObserver};
use crate::sorter::Sorter;
use crate::{DigitKey, SortError};
use std::fmt::Display;

pub struct RadixSortBuilder<'a, T> {
    data: &'a mut [T],
    observer: Box<dyn PassObserver<T> + 'a>,
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: DigitKey + 'a,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            observer: Box::new(NoopObserver),
        }
    }

    /// Replaces the observer that is notified after every digit pass.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: PassObserver<T> + 'a,
    {
        self.observer = Box::new(observer);

        self
    }

    /// Same as `with_observer`, but lets closure argument types be inferred.
    pub fn on_pass<F>(self, f: F) -> Self
    where
        F: FnMut(&PassInfo<T>, &[T]) + 'a,
    {
        self.with_observer(f)
    }

    pub fn sort(mut self) -> Result<(), SortError> {
        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return Ok(());
        }

        let mut sorter = Sorter::new(&mut *self.observer);
        sorter.sort(self.data)
    }
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: DigitKey + Display + 'a,
{
    /// Prints the data to stdout after every digit pass.
    pub fn with_printing(self) -> Self {
        self.with_observer(PrintObserver::stdout())
    }
}
