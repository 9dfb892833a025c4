use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn registering_a_callback_requests_a_frame() {
    let scheduler = Arc::new(TestScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();

    assert!(!runtime.needs_frame());
    let id = handle.register_frame_callback(|_| {});
    assert!(id.is_some());
    assert!(runtime.needs_frame());
    assert_eq!(scheduler.frame_requests(), 1);
}

#[test]
fn drain_runs_callbacks_in_registration_order_with_frame_time() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for tag in ["a", "b"] {
        let seen = Rc::clone(&seen);
        handle.register_frame_callback(move |time| seen.borrow_mut().push((tag, time)));
    }
    handle.drain_frame_callbacks(42);

    assert_eq!(seen.borrow().as_slice(), &[("a", 42), ("b", 42)]);
    assert!(!handle.has_frame_callbacks());
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    {
        let seen = Rc::clone(&seen);
        let inner_handle = handle.clone();
        handle.register_frame_callback(move |time| {
            seen.borrow_mut().push(time);
            let seen = Rc::clone(&seen);
            inner_handle.register_frame_callback(move |time| seen.borrow_mut().push(time));
        });
    }

    handle.drain_frame_callbacks(1);
    assert_eq!(seen.borrow().as_slice(), &[1]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2);
    assert_eq!(seen.borrow().as_slice(), &[1, 2]);
}

#[test]
fn cancelled_callback_never_runs() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let ran = Rc::new(RefCell::new(false));

    let id = {
        let ran = Rc::clone(&ran);
        handle
            .register_frame_callback(move |_| *ran.borrow_mut() = true)
            .expect("runtime alive")
    };
    handle.cancel_frame_callback(id);
    handle.drain_frame_callbacks(0);

    assert!(!*ran.borrow());
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let ran = Rc::new(RefCell::new(false));

    let registration = {
        let ran = Rc::clone(&ran);
        clock.with_frame_nanos(move |_| *ran.borrow_mut() = true)
    };
    assert!(registration.is_active());
    drop(registration);
    runtime.handle().drain_frame_callbacks(0);

    assert!(!*ran.borrow());
}

#[test]
fn with_frame_millis_converts_nanos() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(None));

    let _registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_millis(move |millis| *seen.borrow_mut() = Some(millis))
    };
    runtime.handle().drain_frame_callbacks(16_666_667);

    assert_eq!(*seen.borrow(), Some(16));
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(!handle.frame_clock().with_frame_nanos(|_| {}).is_active());
    handle.drain_frame_callbacks(0);
}
