//! `LogObserver` reports every digit pass through the `log` facade at debug level. Nothing is
//! emitted unless the application installs a logger.

use crate::observer::{PassInfo, PassObserver};
use crate::utils::format_array;
use log::{debug, log_enabled, Level};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl<T> PassObserver<T> for LogObserver
where
    T: Display,
{
    fn on_pass(&mut self, info: &PassInfo<T>, bucket: &[T]) {
        if log_enabled!(Level::Debug) {
            debug!(
                "pass {} (place {}, {} items): {}",
                info.pass,
                info.place,
                info.len,
                format_array(bucket)
            );
        }
    }
}
