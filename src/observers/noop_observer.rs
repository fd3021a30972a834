use crate::observer::{PassInfo, PassObserver};

/// The default observer. Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> PassObserver<T> for NoopObserver {
    #[inline]
    fn on_pass(&mut self, _info: &PassInfo<T>, _bucket: &[T]) {}
}
