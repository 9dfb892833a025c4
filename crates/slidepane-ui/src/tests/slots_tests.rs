use super::*;

fn child(id: ChildId, gravity: Gravity, width: i32) -> ChildSpec {
    ChildSpec::new(id, gravity, width)
}

#[test]
fn classify_buckets_by_horizontal_gravity() {
    let slots = SlotAssignment::classify(&[
        child(7, Gravity::CENTER, 400),
        child(3, Gravity::RIGHT | Gravity::TOP, 120),
        child(5, Gravity::LEFT, 80),
    ])
    .expect("valid children");

    assert_eq!(slots.left, Some(SlotChild { id: 5, width: 80 }));
    assert_eq!(slots.right, Some(SlotChild { id: 3, width: 120 }));
    assert_eq!(slots.center, Some(SlotChild { id: 7, width: 400 }));
}

#[test]
fn side_slots_are_optional() {
    let slots =
        SlotAssignment::classify(&[child(0, Gravity::CENTER_HORIZONTAL, 300)]).expect("valid");
    assert!(slots.left.is_none());
    assert!(slots.right.is_none());
    assert_eq!(slots.width(Slot::Left), 0);
    assert_eq!(slots.width(Slot::Center), 300);
}

#[test]
fn more_than_three_children_is_rejected() {
    let err = SlotAssignment::classify(&[
        child(0, Gravity::LEFT, 1),
        child(1, Gravity::RIGHT, 1),
        child(2, Gravity::CENTER_HORIZONTAL, 1),
        child(3, Gravity::CENTER_HORIZONTAL, 1),
    ])
    .unwrap_err();
    assert_eq!(err, SlideRowError::TooManyChildren { count: 4 });
}

#[test]
fn duplicate_slot_is_rejected() {
    let err = SlotAssignment::classify(&[child(0, Gravity::LEFT, 1), child(1, Gravity::LEFT, 1)])
        .unwrap_err();
    assert_eq!(
        err,
        SlideRowError::DuplicateSlot {
            slot: Slot::Left,
            child: 1
        }
    );
    assert_eq!(err.to_string(), "duplicate left view (child 1)");
}

#[test]
fn unrecognized_gravity_is_rejected() {
    for gravity in [
        Gravity::NO_GRAVITY,
        Gravity::FILL_HORIZONTAL,
        Gravity::CENTER_VERTICAL,
    ] {
        let err = SlotAssignment::classify(&[child(9, gravity, 1)]).unwrap_err();
        assert_eq!(err, SlideRowError::UnknownGravity { child: 9, gravity });
    }
}

#[test]
fn negative_widths_are_treated_as_empty() {
    let slots = SlotAssignment::classify(&[child(0, Gravity::RIGHT, -20)]).expect("valid");
    assert_eq!(slots.width(Slot::Right), 0);
}

#[test]
fn draw_order_puts_center_last() {
    let slots = SlotAssignment::classify(&[
        child(10, Gravity::CENTER_HORIZONTAL, 1),
        child(11, Gravity::RIGHT, 1),
        child(12, Gravity::LEFT, 1),
    ])
    .expect("valid");
    assert_eq!(slots.draw_order().as_slice(), &[12, 11, 10]);

    let right_only = SlotAssignment::classify(&[
        child(1, Gravity::CENTER_HORIZONTAL, 1),
        child(2, Gravity::RIGHT, 1),
    ])
    .expect("valid");
    assert_eq!(right_only.draw_order().as_slice(), &[2, 1]);
}
