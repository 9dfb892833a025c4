use slidepane_foundation::gesture_constants::{FLING_DURATION_MILLIS, SNAP_DURATION_MILLIS};

/// Behavior switches for a [`SlideRow`](crate::SlideRow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRowConfig {
    /// Allow a drag to open the left panel.
    pub allow_left_reveal: bool,
    /// Allow a drag to open the right panel.
    pub allow_right_reveal: bool,
    /// Duration of the settle after a drag is released.
    pub snap_duration_millis: u64,
    /// Duration of the settle after a fling.
    pub fling_duration_millis: u64,
}

impl SlideRowConfig {
    pub fn with_left_reveal(mut self, allow: bool) -> Self {
        self.allow_left_reveal = allow;
        self
    }

    pub fn with_right_reveal(mut self, allow: bool) -> Self {
        self.allow_right_reveal = allow;
        self
    }

    pub fn with_snap_duration(mut self, duration_millis: u64) -> Self {
        self.snap_duration_millis = duration_millis;
        self
    }

    pub fn with_fling_duration(mut self, duration_millis: u64) -> Self {
        self.fling_duration_millis = duration_millis;
        self
    }
}

impl Default for SlideRowConfig {
    fn default() -> Self {
        Self {
            allow_left_reveal: true,
            allow_right_reveal: true,
            snap_duration_millis: SNAP_DURATION_MILLIS,
            fling_duration_millis: FLING_DURATION_MILLIS,
        }
    }
}
