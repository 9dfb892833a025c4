use slidepane_foundation::Gravity;

use crate::host::ChildId;
use crate::slots::{Slot, MAX_CHILDREN};

/// Structural misuse of a row, reported when children are arranged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideRowError {
    TooManyChildren { count: usize },
    DuplicateSlot { slot: Slot, child: ChildId },
    UnknownGravity { child: ChildId, gravity: Gravity },
}

impl std::fmt::Display for SlideRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlideRowError::TooManyChildren { count } => write!(
                f,
                "slide row can not contain more than {MAX_CHILDREN} children (got {count})"
            ),
            SlideRowError::DuplicateSlot { slot, child } => {
                write!(f, "duplicate {slot} view (child {child})")
            }
            SlideRowError::UnknownGravity { child, gravity } => {
                write!(f, "unknown gravity {gravity} on child {child}")
            }
        }
    }
}

impl std::error::Error for SlideRowError {}
