use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use slidepane_core::Clock;

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    type Instant = u64;

    fn now(&self) -> Self::Instant {
        self.millis.load(Ordering::SeqCst)
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        self.now().saturating_sub(since)
    }
}
