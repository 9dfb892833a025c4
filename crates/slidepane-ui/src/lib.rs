//! Three-slot horizontal slide row.
//!
//! A row holds up to three children: a center view that follows the finger,
//! and optional left and right panels it uncovers. The host lays children
//! out and paints them; [`SlideRow`] decides where the center goes.
//!
//! ```ignore
//! let row = SlideRow::new(Box::new(host), Box::new(classifier), runtime.handle());
//! row.arrange(480, &[
//!     ChildSpec::new(0, Gravity::LEFT, 120),
//!     ChildSpec::new(1, Gravity::RIGHT, 160),
//!     ChildSpec::new(2, Gravity::CENTER_HORIZONTAL, 480),
//! ])?;
//! row.pointer_event(&PointerEvent::down(200.0, 20.0));
//! ```

mod config;
mod error;
mod host;
mod listener;
mod row;
mod slots;
mod state;

pub use config::SlideRowConfig;
pub use error::SlideRowError;
pub use host::{ChildId, ChildSpec, RowHost};
pub use listener::SideOpenListener;
pub use row::{SlideRow, WeakSlideRow};
pub use slots::{Slot, SlotAssignment, SlotChild, MAX_CHILDREN};
pub use state::{Mode, RowState, SideState};

pub use slidepane_foundation::{
    gesture_constants, GestureClassifier, GestureListener, Gravity, Point, PointerEvent,
    PointerEventKind,
};
