mod log_observer;
mod noop_observer;
mod print_observer;

pub use log_observer::LogObserver;
pub use noop_observer::NoopObserver;
pub use print_observer::PrintObserver;
