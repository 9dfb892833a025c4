use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidepane_testing::prelude::*;

fn drag_and_settle_right_panel(c: &mut Criterion) {
    let robot = RowRobot::new(200, 300);

    c.bench_function("drag_and_settle_right_panel", |b| {
        b.iter(|| {
            robot.press();
            for _ in 0..20 {
                robot.drag_by(black_box(-12.0));
            }
            robot.lift();
            robot.wait_for_idle();
            robot.press();
            robot.drag_by(black_box(240.0));
            robot.lift();
            robot.wait_for_idle();
        });
    });
}

fn fling_between_sides(c: &mut Criterion) {
    let robot = RowRobot::new(200, 300);

    c.bench_function("fling_between_sides", |b| {
        b.iter(|| {
            robot.press();
            robot.drag_by(-40.0);
            robot.fling(black_box(-1_500.0), 0.0);
            robot.wait_for_idle();
            robot.press();
            robot.drag_by(40.0);
            robot.fling(black_box(1_500.0), 0.0);
            robot.wait_for_idle();
        });
    });
}

criterion_group!(benches, drag_and_settle_right_panel, fling_between_sides);
criterion_main!(benches);
