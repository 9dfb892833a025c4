use std::cell::RefCell;
use std::rc::Rc;

use slidepane_ui::{SideOpenListener, SlideRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    LeftOpen(i32),
    RightOpen(i32),
    Closed,
}

/// Listener that keeps every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingListener {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.notifications.borrow_mut().clear();
    }
}

impl SideOpenListener for RecordingListener {
    fn on_left_open(&self, _owner: &SlideRow, size: i32) {
        self.notifications
            .borrow_mut()
            .push(Notification::LeftOpen(size));
    }

    fn on_right_open(&self, _owner: &SlideRow, size: i32) {
        self.notifications
            .borrow_mut()
            .push(Notification::RightOpen(size));
    }

    fn on_close(&self, _owner: &SlideRow) {
        self.notifications.borrow_mut().push(Notification::Closed);
    }
}
