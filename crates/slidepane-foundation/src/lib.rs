//! Input contracts and layout attributes shared by SlidePane rows.

pub mod gesture_constants;
pub mod gravity;
pub mod input;

pub use gravity::Gravity;
pub use input::gestures::{GestureClassifier, GestureListener};
pub use input::types::{Point, PointerEvent, PointerEventKind};
