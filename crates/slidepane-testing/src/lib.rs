//! Testing utilities and harness for SlidePane

pub mod classifier;
pub mod clock;
pub mod host;
pub mod listener;
pub mod robot;

pub use classifier::{ClassifierScript, Gesture, ScriptedClassifier};
pub use clock::ManualClock;
pub use host::{HostRecord, RecordingHost};
pub use listener::{Notification, RecordingListener};
pub use robot::RowRobot;

pub mod prelude {
    pub use crate::classifier::{ClassifierScript, Gesture, ScriptedClassifier};
    pub use crate::clock::ManualClock;
    pub use crate::host::{HostRecord, RecordingHost};
    pub use crate::listener::{Notification, RecordingListener};
    pub use crate::robot::*;
}
