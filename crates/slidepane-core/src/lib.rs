//! Core runtime for SlidePane.
//!
//! Hosts the single-threaded frame-callback queue that animations use to
//! advance once per display refresh, plus the platform hooks a host
//! implements to be told when a frame is wanted.

mod frame_clock;
mod frame_driver;
pub mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use frame_driver::FrameDriver;
pub use platform::{Clock, RuntimeScheduler, SystemClock};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle, TestScheduler};

pub type FrameCallbackId = u64;

/// Converts a frame timestamp in nanoseconds to whole milliseconds.
pub fn nanos_to_millis(nanos: u64) -> u64 {
    nanos / 1_000_000
}
