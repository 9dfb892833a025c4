use crate::platform::{Clock, SystemClock};
use crate::runtime::RuntimeHandle;

/// Host-side frame loop: stamps each frame with the time elapsed on a
/// [`Clock`] since the driver was created, then runs pending callbacks.
pub struct FrameDriver<C: Clock> {
    runtime: RuntimeHandle,
    clock: C,
    start_time: C::Instant,
}

impl FrameDriver<SystemClock> {
    pub fn with_system_clock(runtime: RuntimeHandle) -> Self {
        Self::new(runtime, SystemClock)
    }
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(runtime: RuntimeHandle, clock: C) -> Self {
        let start_time = clock.now();
        Self {
            runtime,
            clock,
            start_time,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Milliseconds since the driver started.
    pub fn now_millis(&self) -> u64 {
        self.clock.elapsed_millis(self.start_time)
    }

    /// Run one frame if the runtime asked for one. Returns whether it did.
    pub fn pump_frame(&self) -> bool {
        if !self.runtime.needs_frame() {
            return false;
        }
        let frame_time = self.now_millis().saturating_mul(1_000_000);
        self.runtime.drain_frame_callbacks(frame_time);
        true
    }
}

impl<C: Clock> std::fmt::Debug for FrameDriver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameDriver")
            .field("runtime", &self.runtime)
            .field("now_millis", &self.now_millis())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/frame_driver_tests.rs"]
mod tests;
