/// A value that can be taken apart into decimal digits.
///
/// Digit places are expressed in the key type itself (1, 10, 100, ...), so a
/// place can never exceed the range of the values it is applied to.
///
/// Only non-negative values have digits. Implementations must report
/// negative values through `is_negative` so that sorts can reject them before
/// touching any data.
pub trait DigitKey: Copy + Ord {
    /// The units place.
    fn first_place() -> Self;

    /// The place ten times larger than `place`, or `None` if it does not fit
    /// in `Self`.
    fn next_place(place: Self) -> Option<Self>;

    /// The decimal digit of `self` at `place`, i.e. `(self / place) % 10`.
    fn digit(&self, place: Self) -> usize;

    /// Whether `self` has any digits at or above `place`.
    fn has_digit_at(&self, place: Self) -> bool;

    fn is_negative(&self) -> bool;
}
