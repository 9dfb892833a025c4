use super::*;

#[test]
fn new_scroller_is_finished() {
    let mut scroller = Scroller::new();
    assert!(scroller.is_finished());
    assert!(!scroller.compute_scroll_offset(0));
}

#[test]
fn first_frame_latches_start_time_at_start_position() {
    let mut scroller = Scroller::new();
    scroller.start_scroll(-100, 100, 100);

    assert!(scroller.compute_scroll_offset(5_000));
    assert_eq!(scroller.curr(), -100);
    assert!(!scroller.is_finished());
    assert_eq!(scroller.time_passed(5_016), 16);
}

#[test]
fn linear_run_interpolates_and_finishes_on_target() {
    let mut scroller = Scroller::with_easing(Easing::LinearEasing);
    scroller.start_scroll(0, 200, 200);

    assert!(scroller.compute_scroll_offset(1_000));
    assert!(scroller.compute_scroll_offset(1_050));
    assert_eq!(scroller.curr(), 50);
    assert!(scroller.compute_scroll_offset(1_100));
    assert_eq!(scroller.curr(), 100);

    assert!(scroller.compute_scroll_offset(1_200));
    assert_eq!(scroller.curr(), 200);
    assert!(scroller.is_finished());

    // Once finished, further frames report nothing new.
    assert!(!scroller.compute_scroll_offset(1_300));
    assert_eq!(scroller.curr(), 200);
}

#[test]
fn viscous_run_moves_toward_target_without_overshoot() {
    let mut scroller = Scroller::new();
    scroller.start_scroll(-250, 250, 200);

    let mut positions = Vec::new();
    let mut time = 0;
    scroller.compute_scroll_offset(time);
    while !scroller.is_finished() {
        time += 16;
        scroller.compute_scroll_offset(time);
        positions.push(scroller.curr());
    }

    assert_eq!(positions.last(), Some(&0));
    assert!(positions.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(positions.iter().all(|&position| (-250..=0).contains(&position)));
}

#[test]
fn zero_duration_run_finishes_on_first_frame() {
    let mut scroller = Scroller::new();
    scroller.start_scroll(10, -10, 0);

    assert!(scroller.compute_scroll_offset(7));
    assert_eq!(scroller.curr(), 0);
    assert!(scroller.is_finished());
}

#[test]
fn abort_keeps_last_position() {
    let mut scroller = Scroller::with_easing(Easing::LinearEasing);
    scroller.start_scroll(0, 100, 100);
    scroller.compute_scroll_offset(0);
    scroller.compute_scroll_offset(40);
    scroller.abort_animation();

    assert!(scroller.is_finished());
    assert_eq!(scroller.curr(), 40);
    assert!(!scroller.compute_scroll_offset(100));
}

#[test]
fn force_finished_jumps_to_final_position() {
    let mut scroller = Scroller::new();
    scroller.start_scroll(0, -300, 100);
    scroller.force_finished();

    assert!(scroller.is_finished());
    assert_eq!(scroller.curr(), -300);
    assert_eq!(scroller.final_position(), -300);
}

#[test]
fn restart_replaces_previous_run() {
    let mut scroller = Scroller::with_easing(Easing::LinearEasing);
    scroller.start_scroll(0, 100, 100);
    scroller.compute_scroll_offset(0);
    scroller.compute_scroll_offset(50);

    scroller.start_scroll(scroller.curr(), -50, 100);
    assert_eq!(scroller.start(), 50);
    assert_eq!(scroller.delta(), -50);
    assert!(scroller.compute_scroll_offset(60));
    assert_eq!(scroller.curr(), 50);
    assert!(scroller.compute_scroll_offset(160));
    assert_eq!(scroller.curr(), 0);
}
