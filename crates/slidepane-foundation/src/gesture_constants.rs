//! Timing constants for settle animations.
//!
//! Values are in milliseconds of frame time.

/// Duration of the settle animation started when a drag is released.
pub const SNAP_DURATION_MILLIS: u64 = 100;

/// Duration of the settle animation started by a fling.
///
/// Twice the release snap: a fling usually covers the full panel width.
pub const FLING_DURATION_MILLIS: u64 = 200;
