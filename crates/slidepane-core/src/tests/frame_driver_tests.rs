use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::runtime::{Runtime, TestScheduler};

#[derive(Clone, Default)]
struct StepClock {
    millis: Arc<AtomicU64>,
}

impl StepClock {
    fn advance(&self, millis: u64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for StepClock {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now().saturating_sub(since)
    }
}

#[test]
fn frames_are_stamped_relative_to_driver_start() {
    let runtime = Runtime::new(Arc::new(TestScheduler::default()));
    let clock = StepClock::default();
    clock.advance(1_000);
    let driver = FrameDriver::new(runtime.handle(), clock.clone());

    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let _registration = runtime
        .frame_clock()
        .with_frame_millis(move |millis| *sink.borrow_mut() = Some(millis));

    clock.advance(16);
    assert_eq!(driver.now_millis(), 16);
    assert!(driver.pump_frame());
    assert_eq!(*seen.borrow(), Some(16));
}

#[test]
fn idle_runtime_skips_frame() {
    let runtime = Runtime::new(Arc::new(TestScheduler::default()));
    let driver = FrameDriver::new(runtime.handle(), StepClock::default());

    assert!(!driver.pump_frame());

    let registration = runtime.frame_clock().with_frame_nanos(|_| {});
    registration.cancel();
    assert!(!driver.pump_frame());
}

#[test]
fn system_clock_driver_moves_forward() {
    let runtime = Runtime::new(Arc::new(TestScheduler::default()));
    let driver = FrameDriver::with_system_clock(runtime.handle());
    let start = driver.clock().now();

    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(driver.clock().elapsed_millis(start) >= 2);
    assert!(driver.now_millis() >= 2);
}
