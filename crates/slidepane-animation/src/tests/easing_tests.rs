use super::*;

const CURVES: [Easing; 3] = [
    Easing::LinearEasing,
    Easing::ViscousFluid,
    Easing::FastOutSlowInEasing,
];

#[test]
fn curves_are_anchored_at_both_ends() {
    for easing in CURVES {
        assert!(easing.transform(0.0).abs() < 1e-4, "{easing:?} at 0");
        assert!((easing.transform(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
    }
}

#[test]
fn curves_are_monotonic() {
    for easing in CURVES {
        let mut previous = easing.transform(0.0);
        for step in 1..=100 {
            let value = easing.transform(step as f32 / 100.0);
            assert!(value + 1e-5 >= previous, "{easing:?} dipped at step {step}");
            previous = value;
        }
    }
}

#[test]
fn viscous_fluid_front_loads_motion() {
    // Most of the travel happens early, leaving a slow settle at the end.
    assert!(Easing::ViscousFluid.transform(0.5) > 0.8);
}

#[test]
fn out_of_range_fractions_are_clamped() {
    assert_eq!(Easing::LinearEasing.transform(-1.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(2.0), 1.0);
}
