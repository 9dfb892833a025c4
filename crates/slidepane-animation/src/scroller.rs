use crate::Easing;

/// One-dimensional scroll interpolator.
///
/// A run is started with [`Scroller::start_scroll`] and advanced by calling
/// [`Scroller::compute_scroll_offset`] with the current frame time. The start
/// time is latched from the first computation, so a run always begins at its
/// start position regardless of how late the first frame arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    easing: Easing,
    start: i32,
    delta: i32,
    duration_millis: u64,
    start_time_millis: Option<u64>,
    curr: i32,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroller {
    pub fn new() -> Self {
        Self::with_easing(Easing::default())
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            start: 0,
            delta: 0,
            duration_millis: 0,
            start_time_millis: None,
            curr: 0,
            finished: true,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Start scrolling from `start` by `delta` over `duration_millis`.
    ///
    /// Replaces any run in progress.
    pub fn start_scroll(&mut self, start: i32, delta: i32, duration_millis: u64) {
        log::trace!(
            "scroller start: {} -> {} over {}ms",
            start,
            start + delta,
            duration_millis
        );
        self.start = start;
        self.delta = delta;
        self.duration_millis = duration_millis;
        self.start_time_millis = None;
        self.curr = start;
        self.finished = false;
    }

    /// Advance the run to `now_millis`.
    ///
    /// Returns `false` when the run was already finished before this call,
    /// `true` when [`Scroller::curr`] holds a fresh position.
    pub fn compute_scroll_offset(&mut self, now_millis: u64) -> bool {
        if self.finished {
            return false;
        }

        let start_time = *self.start_time_millis.get_or_insert(now_millis);
        let time_passed = now_millis.saturating_sub(start_time);

        if time_passed < self.duration_millis {
            let fraction = time_passed as f32 / self.duration_millis as f32;
            let eased = self.easing.transform(fraction);
            self.curr = self.start + (eased * self.delta as f32).round() as i32;
        } else {
            self.curr = self.final_position();
            self.finished = true;
        }
        true
    }

    /// Stop the run where it is; `curr` keeps the last computed position.
    pub fn abort_animation(&mut self) {
        self.finished = true;
    }

    /// Jump to the end of the run.
    pub fn force_finished(&mut self) {
        self.curr = self.final_position();
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn curr(&self) -> i32 {
        self.curr
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn delta(&self) -> i32 {
        self.delta
    }

    pub fn final_position(&self) -> i32 {
        self.start + self.delta
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    /// Milliseconds since the run's first frame, or zero before it.
    pub fn time_passed(&self, now_millis: u64) -> u64 {
        self.start_time_millis
            .map(|start| now_millis.saturating_sub(start))
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
