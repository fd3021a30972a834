/// Describes a digit pass that has just finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PassInfo<T> {
    /// 1-based index of the pass.
    pub pass: usize,
    /// Digit place the pass sorted by.
    pub place: T,
    pub len: usize,
}

/// Receives the partially sorted data after every digit pass.
///
/// Observers are purely diagnostic; they see the data but cannot change it.
pub trait PassObserver<T> {
    fn on_pass(&mut self, info: &PassInfo<T>, bucket: &[T]);
}

impl<T, F> PassObserver<T> for F
where
    F: FnMut(&PassInfo<T>, &[T]),
{
    #[inline]
    fn on_pass(&mut self, info: &PassInfo<T>, bucket: &[T]) {
        self(info, bucket)
    }
}
