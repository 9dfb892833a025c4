//! The row's view of its host.
//!
//! The host owns the child views and does all measuring and painting. A row
//! only refers to children by id and asks the host to nudge them.

use slidepane_foundation::Gravity;

pub type ChildId = usize;

/// A child as seen at arrangement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSpec {
    pub id: ChildId,
    pub gravity: Gravity,
    /// Measured width in pixels.
    pub width: i32,
}

impl ChildSpec {
    pub fn new(id: ChildId, gravity: Gravity, width: i32) -> Self {
        Self { id, gravity, width }
    }
}

/// Outbound calls a row makes into its host.
///
/// Called with the row's state borrowed: implementations must not call back
/// into the row synchronously.
pub trait RowHost {
    /// Ask ancestors to stop (or resume) intercepting the current gesture.
    fn request_input_exclusivity(&mut self, exclusive: bool);

    fn request_redraw(&mut self);

    /// Move a child horizontally by `dx` pixels relative to where it is now.
    fn offset_child(&mut self, child: ChildId, dx: i32);
}
