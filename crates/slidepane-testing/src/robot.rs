//! Robot-style harness for a single slide row.
//!
//! The robot plays host: it owns the runtime, routes pointer events to the
//! row, scripts what the classifier recognizes, and advances a fake frame
//! clock so settle animations can be stepped deterministically.
//!
//! # Example
//!
//! ```
//! use slidepane_testing::robot::{RowRobot, CENTER};
//!
//! let robot = RowRobot::new(120, 160);
//! robot.press();
//! robot.drag_by(-100.0); // finger moves left
//! robot.lift();
//! robot.wait_for_idle();
//! assert_eq!(robot.row().offset(), -160);
//! assert_eq!(robot.host().position(CENTER), -160);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use slidepane_core::{FrameDriver, Runtime, TestScheduler};
use slidepane_foundation::{Gravity, PointerEvent};
use slidepane_ui::{ChildId, ChildSpec, SlideRow, SlideRowConfig};

use crate::classifier::{ClassifierScript, Gesture, ScriptedClassifier};
use crate::clock::ManualClock;
use crate::host::RecordingHost;
use crate::listener::{Notification, RecordingListener};

pub const LEFT: ChildId = 1;
pub const RIGHT: ChildId = 2;
pub const CENTER: ChildId = 3;
pub const ROW_WIDTH: i32 = 480;

/// Nominal frame interval, ~60 FPS.
pub const FRAME_MILLIS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 256;

pub struct RowRobot {
    runtime: Runtime,
    scheduler: Arc<TestScheduler>,
    clock: ManualClock,
    driver: FrameDriver<ManualClock>,
    host: RecordingHost,
    script: ClassifierScript,
    listener: Rc<RecordingListener>,
    row: SlideRow,
    pointer_x: Cell<f32>,
    dragged: Cell<bool>,
}

impl RowRobot {
    /// Row with the given side panel widths; zero leaves that slot empty.
    pub fn new(left_width: i32, right_width: i32) -> Self {
        Self::with_config(left_width, right_width, SlideRowConfig::default())
    }

    pub fn with_config(left_width: i32, right_width: i32, config: SlideRowConfig) -> Self {
        let scheduler = Arc::new(TestScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = ManualClock::new();
        let driver = FrameDriver::new(runtime.handle(), clock.clone());
        let host = RecordingHost::new();
        let (classifier, script) = ScriptedClassifier::new();
        let row = SlideRow::with_config(
            Box::new(host.clone()),
            Box::new(classifier),
            runtime.handle(),
            config,
        );
        let listener = RecordingListener::new();
        row.set_listener(Some(listener.clone()));

        let robot = Self {
            runtime,
            scheduler,
            clock,
            driver,
            host,
            script,
            listener,
            row,
            pointer_x: Cell::new(ROW_WIDTH as f32 / 2.0),
            dragged: Cell::new(false),
        };
        robot
            .row
            .arrange(ROW_WIDTH, &Self::children(left_width, right_width))
            .expect("robot children are valid");
        robot
    }

    /// Child list for the given side widths, center first.
    pub fn children(left_width: i32, right_width: i32) -> Vec<ChildSpec> {
        let mut children = vec![ChildSpec::new(
            CENTER,
            Gravity::CENTER_HORIZONTAL,
            ROW_WIDTH,
        )];
        if left_width > 0 {
            children.push(ChildSpec::new(LEFT, Gravity::LEFT, left_width));
        }
        if right_width > 0 {
            children.push(ChildSpec::new(RIGHT, Gravity::RIGHT, right_width));
        }
        children
    }

    pub fn row(&self) -> &SlideRow {
        &self.row
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn script(&self) -> &ClassifierScript {
        &self.script
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame_requests(&self) -> usize {
        self.scheduler.frame_requests()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.listener.notifications()
    }

    pub fn listener(&self) -> &Rc<RecordingListener> {
        &self.listener
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Milliseconds of fake time since the robot was built.
    pub fn now_millis(&self) -> u64 {
        self.driver.now_millis()
    }

    /// Re-run arrangement, as after a host layout pass.
    pub fn relayout(&self, left_width: i32, right_width: i32) {
        self.host.reset_positions();
        self.row
            .arrange(ROW_WIDTH, &Self::children(left_width, right_width))
            .expect("robot children are valid");
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    /// Put a finger down at the middle of the row.
    pub fn press(&self) -> bool {
        self.dragged.set(false);
        self.pointer_x.set(ROW_WIDTH as f32 / 2.0);
        self.send(PointerEvent::down(self.pointer_x.get(), 10.0), [Gesture::Down])
    }

    /// Move the finger horizontally by `dx` (positive is rightward).
    pub fn drag_by(&self, dx: f32) -> bool {
        self.drag_by_xy(dx, 0.0)
    }

    /// Move the finger by `(dx, dy)`, reported as one scroll step.
    pub fn drag_by_xy(&self, dx: f32, dy: f32) -> bool {
        self.dragged.set(true);
        let x = self.pointer_x.get() + dx;
        self.pointer_x.set(x);
        // Scroll distances are previous minus current.
        self.send(PointerEvent::moved(x, 10.0 + dy), [Gesture::Scroll(-dx, -dy)])
    }

    /// Lift the finger. A lift without any drag is a tap.
    pub fn lift(&self) -> bool {
        let gestures: Vec<Gesture> = if self.dragged.get() {
            Vec::new()
        } else {
            vec![Gesture::SingleTapUp]
        };
        self.send(PointerEvent::up(self.pointer_x.get(), 10.0), gestures)
    }

    /// Lift the finger while it is still moving at `velocity_x` px/s.
    pub fn fling(&self, velocity_x: f32, velocity_y: f32) -> bool {
        self.send(
            PointerEvent::up(self.pointer_x.get(), 10.0),
            [Gesture::Fling(velocity_x, velocity_y)],
        )
    }

    pub fn cancel(&self) -> bool {
        self.send(PointerEvent::cancel(), Vec::new())
    }

    fn send(&self, event: PointerEvent, gestures: impl IntoIterator<Item = Gesture>) -> bool {
        self.script.push(gestures);
        self.row
            .pointer_event(&event.with_time(self.now_millis()))
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// Advance the fake clock by one frame and run a frame if one was asked for.
    pub fn advance_frame(&self) {
        self.advance_time(FRAME_MILLIS);
    }

    pub fn advance_time(&self, millis: u64) {
        self.clock.advance(millis);
        self.driver.pump_frame();
    }

    /// Pump frames until no callback is pending. Returns frames pumped.
    pub fn wait_for_idle(&self) -> usize {
        let mut frames = 0;
        while self.runtime.handle().has_frame_callbacks() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "row did not settle within {MAX_IDLE_FRAMES} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        frames
    }

    /// Offsets observed after each frame until idle.
    pub fn record_settle(&self) -> Vec<i32> {
        let mut offsets = Vec::new();
        while self.runtime.handle().has_frame_callbacks() {
            assert!(offsets.len() < MAX_IDLE_FRAMES, "row did not settle");
            self.advance_frame();
            offsets.push(self.row.offset());
        }
        offsets
    }
}
