//! Platform abstraction traits for SlidePane runtime services.
//!
//! These traits let the host platform own frame scheduling and time so the
//! runtime never talks to a windowing system directly.

use web_time::Instant;

/// Schedules work for the SlidePane runtime.
///
/// Implementations are asked for a frame every time a frame callback is
/// registered. They must be safe to share across threads even though the
/// runtime itself only calls them from the UI thread.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time`, usable on native and wasm targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}
