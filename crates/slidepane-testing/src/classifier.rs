//! Classifier double that replays scripted gestures.
//!
//! Real classifiers decide gestures from pointer motion; tests decide them up
//! front. Each raw event pops one batch from the script and delivers it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use slidepane_foundation::{GestureClassifier, GestureListener, PointerEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Down,
    SingleTapUp,
    /// Distances use the previous-minus-current convention.
    Scroll(f32, f32),
    /// Velocities in pixels per second, current-minus-previous.
    Fling(f32, f32),
    LongPress,
    ShowPress,
}

impl Gesture {
    fn deliver(self, listener: &mut dyn GestureListener) -> bool {
        match self {
            Gesture::Down => listener.on_down(),
            Gesture::SingleTapUp => listener.on_single_tap_up(),
            Gesture::Scroll(dx, dy) => listener.on_scroll(dx, dy),
            Gesture::Fling(vx, vy) => listener.on_fling(vx, vy),
            Gesture::LongPress => {
                listener.on_long_press();
                false
            }
            Gesture::ShowPress => {
                listener.on_show_press();
                false
            }
        }
    }
}

/// Producer side of a [`ScriptedClassifier`].
#[derive(Debug, Default, Clone)]
pub struct ClassifierScript {
    batches: Rc<RefCell<VecDeque<Vec<Gesture>>>>,
}

impl ClassifierScript {
    /// Gestures to emit for the next raw event.
    pub fn push(&self, gestures: impl IntoIterator<Item = Gesture>) {
        self.batches
            .borrow_mut()
            .push_back(gestures.into_iter().collect());
    }

    pub fn pending(&self) -> usize {
        self.batches.borrow().len()
    }
}

#[derive(Debug, Default)]
pub struct ScriptedClassifier {
    script: ClassifierScript,
    delivered: Vec<Gesture>,
}

impl ScriptedClassifier {
    pub fn new() -> (Self, ClassifierScript) {
        let script = ClassifierScript::default();
        (
            Self {
                script: script.clone(),
                delivered: Vec::new(),
            },
            script,
        )
    }

    pub fn delivered(&self) -> &[Gesture] {
        &self.delivered
    }
}

impl GestureClassifier for ScriptedClassifier {
    fn on_pointer_event(
        &mut self,
        _event: &PointerEvent,
        listener: &mut dyn GestureListener,
    ) -> bool {
        let batch = self.script.batches.borrow_mut().pop_front();
        let mut handled = false;
        for gesture in batch.unwrap_or_default() {
            self.delivered.push(gesture);
            handled |= gesture.deliver(listener);
        }
        handled
    }
}
