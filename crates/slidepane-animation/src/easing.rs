/// Scaling applied to the fraction before the viscous fluid curve.
const VISCOUS_FLUID_SCALE: f32 = 8.0;

/// Easing curves available to a [`Scroller`](crate::Scroller).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Fast start that settles into the target like a damped fluid.
    ///
    /// This is the classic scroller curve and the default.
    #[default]
    ViscousFluid,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::ViscousFluid => viscous_fluid_interpolation(fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

fn viscous_fluid(x: f32) -> f32 {
    let x = x * VISCOUS_FLUID_SCALE;
    if x < 1.0 {
        x - (1.0 - (-x).exp())
    } else {
        // 1/e, the value of the first segment at x == 1
        let start = 0.367_879_44_f32;
        let x = 1.0 - (1.0 - x).exp();
        start + x * (1.0 - start)
    }
}

fn viscous_fluid_interpolation(fraction: f32) -> f32 {
    let normalize = 1.0 / viscous_fluid(1.0);
    let offset = 1.0 - normalize * viscous_fluid(1.0);
    let interpolated = normalize * viscous_fluid(fraction);
    if interpolated > 0.0 {
        interpolated + offset
    } else {
        interpolated
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;

    // Bisection on the x curve; it is monotonic for control points in [0, 1].
    let mut low = 0.0f32;
    let mut high = 1.0f32;
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
