pub mod gestures;
pub mod types;

pub use gestures::{GestureClassifier, GestureListener};
pub use types::{Point, PointerEvent, PointerEventKind};
