use crate::observer::{PassInfo, PassObserver};
use crate::sorts::counting_sort;
use crate::utils::*;
use crate::{DigitKey, SortError};
use log::{trace, warn};

/// Drives one counting pass per decimal digit, from the units place up to the
/// most significant digit of the largest key.
pub struct Sorter<'a, T> {
    observer: &'a mut dyn PassObserver<T>,
}

impl<'a, T> Sorter<'a, T>
where
    T: DigitKey,
{
    pub fn new(observer: &'a mut dyn PassObserver<T>) -> Self {
        Self { observer }
    }

    /// Sorts `bucket` ascending. On error, the passes that already finished
    /// stay applied and the failing pass leaves the data as it found it.
    pub fn sort(&mut self, bucket: &mut [T]) -> Result<(), SortError> {
        // By definition, this is already sorted
        if bucket.len() < 2 {
            return Ok(());
        }

        if let Some(index) = find_negative(bucket) {
            return Err(SortError::NegativeKey { index });
        }

        let max = match get_max(bucket) {
            Some(max) => max,
            None => return Ok(()),
        };

        let mut place = T::first_place();
        let mut pass = 0;

        while max.has_digit_at(place) {
            pass += 1;
            trace!("pass {} over {} items", pass, bucket.len());

            if let Err(e) = counting_sort(bucket, place) {
                warn!("pass {} failed: {}", pass, e);
                return Err(e);
            }

            let info = PassInfo {
                pass,
                place,
                len: bucket.len(),
            };
            self.observer.on_pass(&info, bucket);

            place = match T::next_place(place) {
                Some(next) => next,
                // Every digit place representable in T has been sorted
                None => break,
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::observer::PassInfo;
    use crate::observers::NoopObserver;
    use crate::sorter::Sorter;
    use crate::SortError;

    #[test]
    pub fn test_one_pass_per_digit_of_max() {
        let mut places = Vec::new();
        let mut record = |info: &PassInfo<u32>, _bucket: &[u32]| places.push(info.place);

        let mut data: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
        Sorter::<u32>::new(&mut record).sort(&mut data).unwrap();

        assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        assert_eq!(places, vec![1, 10, 100]);
    }

    #[test]
    pub fn test_intermediate_states() {
        let mut states = Vec::new();
        let mut record = |_info: &PassInfo<u32>, bucket: &[u32]| states.push(bucket.to_vec());

        let mut data: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
        Sorter::<u32>::new(&mut record).sort(&mut data).unwrap();

        assert_eq!(
            states,
            vec![
                vec![170, 90, 802, 2, 24, 45, 75, 66],
                vec![802, 2, 24, 45, 66, 170, 75, 90],
                vec![2, 24, 45, 66, 75, 90, 170, 802],
            ]
        );
    }

    #[test]
    pub fn test_all_zero_runs_no_passes() {
        let mut passes = 0;
        let mut record = |_info: &PassInfo<u8>, _bucket: &[u8]| passes += 1;

        let mut data: Vec<u8> = vec![0, 0, 0];
        Sorter::<u8>::new(&mut record).sort(&mut data).unwrap();

        assert_eq!(data, vec![0, 0, 0]);
        assert_eq!(passes, 0);
    }

    #[test]
    pub fn test_type_max_does_not_overflow_place() {
        let mut passes = 0;
        let mut record = |_info: &PassInfo<u8>, _bucket: &[u8]| passes += 1;

        let mut data: Vec<u8> = vec![255, 0, 128, 7, 254];
        Sorter::<u8>::new(&mut record).sort(&mut data).unwrap();

        assert_eq!(data, vec![0, 7, 128, 254, 255]);
        assert_eq!(passes, 3);

        let mut data: Vec<u64> = vec![u64::MAX, 1, u64::MAX - 1, 0];
        Sorter::<u64>::new(&mut NoopObserver).sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 1, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    pub fn test_negative_key_is_rejected() {
        let mut data: Vec<i32> = vec![-1, -5, -3];
        let res = Sorter::<i32>::new(&mut NoopObserver).sort(&mut data);

        assert_eq!(res, Err(SortError::NegativeKey { index: 0 }));
        assert_eq!(data, vec![-1, -5, -3]);

        let mut data: Vec<i32> = vec![0, 12, -5];
        let res = Sorter::<i32>::new(&mut NoopObserver).sort(&mut data);

        assert_eq!(res, Err(SortError::NegativeKey { index: 2 }));
        assert_eq!(data, vec![0, 12, -5]);
    }
}
