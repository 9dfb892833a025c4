use std::fmt;

use slidepane_foundation::Gravity;
use smallvec::SmallVec;

use crate::error::SlideRowError;
use crate::host::{ChildId, ChildSpec};

pub const MAX_CHILDREN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Left,
    Right,
    Center,
}

impl Slot {
    /// Slot for a child's horizontal gravity, ignoring vertical bits.
    pub fn from_gravity(gravity: Gravity) -> Option<Slot> {
        match gravity.horizontal() {
            Gravity::CENTER_HORIZONTAL => Some(Slot::Center),
            Gravity::LEFT => Some(Slot::Left),
            Gravity::RIGHT => Some(Slot::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Left => "left",
            Slot::Right => "right",
            Slot::Center => "center",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChild {
    pub id: ChildId,
    pub width: i32,
}

/// Which child sits in which slot after an arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotAssignment {
    pub left: Option<SlotChild>,
    pub right: Option<SlotChild>,
    pub center: Option<SlotChild>,
}

impl SlotAssignment {
    /// Bucket children by gravity.
    ///
    /// Fails on more than [`MAX_CHILDREN`] children, on two children claiming
    /// the same slot, or on a gravity that names no slot.
    pub fn classify(children: &[ChildSpec]) -> Result<Self, SlideRowError> {
        if children.len() > MAX_CHILDREN {
            return Err(SlideRowError::TooManyChildren {
                count: children.len(),
            });
        }

        let mut assignment = SlotAssignment::default();
        for child in children {
            let slot = Slot::from_gravity(child.gravity).ok_or(SlideRowError::UnknownGravity {
                child: child.id,
                gravity: child.gravity,
            })?;
            let entry = assignment.slot_mut(slot);
            if entry.is_some() {
                return Err(SlideRowError::DuplicateSlot {
                    slot,
                    child: child.id,
                });
            }
            *entry = Some(SlotChild {
                id: child.id,
                width: child.width.max(0),
            });
        }
        Ok(assignment)
    }

    pub fn get(&self, slot: Slot) -> Option<SlotChild> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
            Slot::Center => self.center,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<SlotChild> {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
            Slot::Center => &mut self.center,
        }
    }

    /// Width of the child in `slot`, zero when the slot is empty.
    pub fn width(&self, slot: Slot) -> i32 {
        self.get(slot).map_or(0, |child| child.width)
    }

    /// Children back to front: side panels first, center on top.
    pub fn draw_order(&self) -> SmallVec<[ChildId; MAX_CHILDREN]> {
        [self.left, self.right, self.center]
            .into_iter()
            .flatten()
            .map(|child| child.id)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/slots_tests.rs"]
mod tests;
