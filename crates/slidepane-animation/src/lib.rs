//! Scroll interpolation for SlidePane.
//!
//! A [`Scroller`] turns a `(start, delta, duration)` triple into a position at
//! any elapsed time. It owns no clock: callers feed it frame timestamps.

mod easing;
mod scroller;

pub use easing::Easing;
pub use scroller::Scroller;
