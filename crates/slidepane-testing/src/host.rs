//! Host double that records everything a row asks of it.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use slidepane_ui::{ChildId, RowHost};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HostRecord {
    /// Accumulated horizontal displacement per child.
    pub positions: HashMap<ChildId, i32>,
    /// Every exclusivity request, in order.
    pub exclusivity: Vec<bool>,
    pub redraws: usize,
}

/// Cloneable [`RowHost`]; clones share one record.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    record: Rc<RefCell<HostRecord>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> Ref<'_, HostRecord> {
        self.record.borrow()
    }

    pub fn position(&self, child: ChildId) -> i32 {
        self.record
            .borrow()
            .positions
            .get(&child)
            .copied()
            .unwrap_or(0)
    }

    /// Latest exclusivity request, if any was made.
    pub fn exclusive(&self) -> Option<bool> {
        self.record.borrow().exclusivity.last().copied()
    }

    pub fn redraws(&self) -> usize {
        self.record.borrow().redraws
    }

    /// Forget all displacements, as a host does when it re-lays out children.
    pub fn reset_positions(&self) {
        self.record.borrow_mut().positions.clear();
    }
}

impl RowHost for RecordingHost {
    fn request_input_exclusivity(&mut self, exclusive: bool) {
        self.record.borrow_mut().exclusivity.push(exclusive);
    }

    fn request_redraw(&mut self) {
        self.record.borrow_mut().redraws += 1;
    }

    fn offset_child(&mut self, child: ChildId, dx: i32) {
        *self
            .record
            .borrow_mut()
            .positions
            .entry(child)
            .or_insert(0) += dx;
    }
}
