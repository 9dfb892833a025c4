//! Semantic gesture contracts.
//!
//! A [`GestureClassifier`] turns raw [`PointerEvent`]s into calls on a
//! [`GestureListener`]. Classifiers own every threshold (touch slop, tap
//! timeout, minimum fling velocity); listeners only see decided gestures.
//!
//! # Sign conventions
//!
//! Scroll distances are reported as *previous − current* position, so a
//! finger moving right produces a negative `distance_x`. Fling velocities are
//! reported as *current − previous* per second, so a finger moving right
//! produces a positive `velocity_x`.

use super::types::PointerEvent;

/// Receiver of classified gestures.
///
/// Methods returning `bool` report whether the listener handled the gesture.
pub trait GestureListener {
    /// A pointer went down. Every gesture stream starts here.
    fn on_down(&mut self) -> bool;

    /// The pointer was released without any drag.
    fn on_single_tap_up(&mut self) -> bool;

    /// The pointer moved past the classifier's slop.
    ///
    /// Distances are the movement since the previous scroll callback.
    fn on_scroll(&mut self, distance_x: f32, distance_y: f32) -> bool;

    /// The pointer was released while moving fast enough to count as a fling.
    ///
    /// Velocities are in pixels per second.
    fn on_fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool;

    fn on_long_press(&mut self) {}

    fn on_show_press(&mut self) {}
}

/// Gesture recognizer supplied by the host.
pub trait GestureClassifier {
    /// Feed one raw event; returns whether any listener callback handled it.
    fn on_pointer_event(&mut self, event: &PointerEvent, listener: &mut dyn GestureListener)
        -> bool;
}
