use crate::DigitKey;

macro_rules! impl_unsigned_digit_key {
    ($($t:ty),*) => {$(
        impl DigitKey for $t {
            #[inline]
            fn first_place() -> Self {
                1
            }

            #[inline]
            fn next_place(place: Self) -> Option<Self> {
                place.checked_mul(10)
            }

            #[inline]
            fn digit(&self, place: Self) -> usize {
                ((*self / place) % 10) as usize
            }

            #[inline]
            fn has_digit_at(&self, place: Self) -> bool {
                *self / place > 0
            }

            #[inline]
            fn is_negative(&self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! impl_signed_digit_key {
    ($($t:ty),*) => {$(
        impl DigitKey for $t {
            #[inline]
            fn first_place() -> Self {
                1
            }

            #[inline]
            fn next_place(place: Self) -> Option<Self> {
                place.checked_mul(10)
            }

            #[inline]
            fn digit(&self, place: Self) -> usize {
                debug_assert!(*self >= 0, "digit of negative key {}", self);
                ((*self / place) % 10) as usize
            }

            #[inline]
            fn has_digit_at(&self, place: Self) -> bool {
                *self / place > 0
            }

            #[inline]
            fn is_negative(&self) -> bool {
                *self < 0
            }
        }
    )*};
}

impl_unsigned_digit_key!(u8, u16, u32, u64, u128, usize);
impl_signed_digit_key!(i8, i16, i32, i64, i128, isize);
