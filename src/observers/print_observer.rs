//! `PrintObserver` writes the whole slice after every digit pass, one line per pass, with items
//! separated by `", "`.
//!
//! It writes to stdout by default, which is what
//! `radix_sort_builder().with_printing()` sets up. Any other `io::Write` can be given with
//! `PrintObserver::new`.

use crate::observer::{PassInfo, PassObserver};
use crate::utils::format_array;
use log::warn;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

pub struct PrintObserver<W> {
    out: W,
}

impl PrintObserver<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W> PrintObserver<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T, W> PassObserver<T> for PrintObserver<W>
where
    T: Display,
    W: Write,
{
    fn on_pass(&mut self, info: &PassInfo<T>, bucket: &[T]) {
        // Write failures are logged, never propagated into the sort.
        if let Err(e) = writeln!(self.out, "{}", format_array(bucket)) {
            warn!("failed to print pass {}: {}", info.pass, e);
        }
    }
}
