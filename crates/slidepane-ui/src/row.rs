//! Slide row controller.
//!
//! A [`SlideRow`] owns the offset of a row's center child and moves it in
//! response to classified gestures. Drags move it directly; releases and
//! flings start a settle animation driven by frame callbacks until the
//! center rests at an anchor (closed or a side fully open).
//!
//! Mode is decided once per gesture stream, on the first directional signal
//! after a pointer-down, and decides which side the stream may open.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slidepane_animation::Scroller;
use slidepane_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use slidepane_foundation::{GestureClassifier, GestureListener, PointerEvent, PointerEventKind};
use smallvec::SmallVec;

use crate::config::SlideRowConfig;
use crate::error::SlideRowError;
use crate::host::{ChildId, ChildSpec, RowHost};
use crate::listener::SideOpenListener;
use crate::slots::{Slot, SlotAssignment, MAX_CHILDREN};
use crate::state::{Mode, RowState, SideState};

type SharedClassifier = Rc<RefCell<Box<dyn GestureClassifier>>>;

struct SlideRowInner {
    host: Box<dyn RowHost>,
    config: SlideRowConfig,
    frame_clock: FrameClock,
    slots: SlotAssignment,
    row_width: i32,
    state: RowState,
    scroller: Scroller,
    /// Bumped whenever a run starts or is aborted; ticks from older runs
    /// see a mismatch and do nothing.
    run_generation: u64,
    registration: Option<FrameCallbackRegistration>,
    listener: Option<Rc<dyn SideOpenListener>>,
}

impl SlideRowInner {
    fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    fn abort_run(&mut self) {
        if self.is_animating() {
            log::trace!("aborting settle at offset {}", self.state.offset);
        }
        self.scroller.abort_animation();
        self.run_generation += 1;
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }

    fn start_run(&mut self, target: i32, duration_millis: u64) -> u64 {
        self.abort_run();
        let offset = self.state.offset;
        self.scroller
            .start_scroll(offset, target - offset, duration_millis);
        self.run_generation
    }

    /// Resolve the drag mode from the first directional signal.
    ///
    /// `horizontal` follows the scroll distance convention: positive means
    /// the finger moved left, pulling the center left over the right panel.
    fn resolve_mode(&mut self, horizontal: f32, vertical: f32, check_permissions: bool) -> Mode {
        let offset = self.state.offset;
        let mode = if vertical.abs() > horizontal.abs() {
            Mode::None
        } else if offset < 0 || (offset == 0 && horizontal > 0.0) {
            let allowed = !check_permissions || self.config.allow_right_reveal;
            if self.slots.right.is_some() && allowed {
                self.enter_right_open();
                Mode::RightOpen
            } else {
                Mode::None
            }
        } else {
            let allowed = !check_permissions || self.config.allow_left_reveal;
            if self.slots.left.is_some() && allowed {
                self.enter_left_open();
                Mode::LeftOpen
            } else {
                Mode::None
            }
        };
        log::debug!(
            "mode resolved to {:?} (h={}, v={}, offset={})",
            mode,
            horizontal,
            vertical,
            offset
        );
        self.state.mode = mode;
        mode
    }

    fn enter_right_open(&mut self) {
        self.host.request_input_exclusivity(true);
        let width = self.row_width;
        if self.state.right_hidden {
            if let Some(right) = self.slots.right {
                self.host.offset_child(right.id, -width);
            }
            self.state.right_hidden = false;
        }
        if !self.state.left_hidden {
            if let Some(left) = self.slots.left {
                self.host.offset_child(left.id, -width);
            }
            self.state.left_hidden = true;
        }
    }

    fn enter_left_open(&mut self) {
        self.host.request_input_exclusivity(true);
        let width = self.row_width;
        if self.state.left_hidden {
            if let Some(left) = self.slots.left {
                self.host.offset_child(left.id, width);
            }
            self.state.left_hidden = false;
        }
        if !self.state.right_hidden {
            if let Some(right) = self.slots.right {
                self.host.offset_child(right.id, width);
            }
            self.state.right_hidden = true;
        }
    }

    /// Clamp a drag target to the range the current mode allows.
    fn clamp_to_mode(&self, target: i32) -> i32 {
        match self.state.mode {
            Mode::RightOpen => target.clamp(-self.slots.width(Slot::Right), 0),
            Mode::LeftOpen => target.clamp(0, self.slots.width(Slot::Left)),
            Mode::Undecided | Mode::None => target,
        }
    }

    fn move_center_to(&mut self, target: i32) {
        let delta = target - self.state.offset;
        if let Some(center) = self.slots.center {
            self.host.offset_child(center.id, delta);
        }
        self.state.offset = target;
        self.host.request_redraw();
    }

    /// Nearest anchor for the current offset, per side.
    fn snap_target(&self) -> i32 {
        let offset = self.state.offset;
        if offset < 0 {
            match self.slots.right {
                Some(right) if -offset > right.width / 2 => -right.width,
                _ => 0,
            }
        } else if offset > 0 {
            match self.slots.left {
                Some(left) if offset >= left.width / 2 => left.width,
                _ => 0,
            }
        } else {
            0
        }
    }

    fn fling_target(&self, velocity_x: f32) -> i32 {
        let leftward = velocity_x < 0.0;
        match (self.state.mode, leftward) {
            (Mode::RightOpen, true) => -self.slots.width(Slot::Right),
            (Mode::LeftOpen, false) => self.slots.width(Slot::Left),
            _ => 0,
        }
    }
}

/// Handle to a three-slot slide row.
///
/// Cloning yields another handle to the same row.
#[derive(Clone)]
pub struct SlideRow {
    inner: Rc<RefCell<SlideRowInner>>,
    classifier: SharedClassifier,
}

/// Non-owning handle held by pending frame callbacks.
#[derive(Clone)]
pub struct WeakSlideRow {
    inner: Weak<RefCell<SlideRowInner>>,
    classifier: Weak<RefCell<Box<dyn GestureClassifier>>>,
}

impl WeakSlideRow {
    pub fn upgrade(&self) -> Option<SlideRow> {
        Some(SlideRow {
            inner: self.inner.upgrade()?,
            classifier: self.classifier.upgrade()?,
        })
    }
}

enum TickOutcome {
    Continue,
    Settled(SideState, Option<Rc<dyn SideOpenListener>>),
}

impl SlideRow {
    pub fn new(
        host: Box<dyn RowHost>,
        classifier: Box<dyn GestureClassifier>,
        runtime: RuntimeHandle,
    ) -> Self {
        Self::with_config(host, classifier, runtime, SlideRowConfig::default())
    }

    pub fn with_config(
        host: Box<dyn RowHost>,
        classifier: Box<dyn GestureClassifier>,
        runtime: RuntimeHandle,
        config: SlideRowConfig,
    ) -> Self {
        let inner = SlideRowInner {
            host,
            config,
            frame_clock: runtime.frame_clock(),
            slots: SlotAssignment::default(),
            row_width: 0,
            state: RowState::default(),
            scroller: Scroller::new(),
            run_generation: 0,
            registration: None,
            listener: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            classifier: Rc::new(RefCell::new(classifier)),
        }
    }

    pub fn downgrade(&self) -> WeakSlideRow {
        WeakSlideRow {
            inner: Rc::downgrade(&self.inner),
            classifier: Rc::downgrade(&self.classifier),
        }
    }

    /// Whether both handles point at the same row.
    pub fn ptr_eq(&self, other: &SlideRow) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------
    // Arrangement
    // ------------------------------------------------------------------

    /// Take a new set of children after the host laid them out at rest.
    ///
    /// Parks the side panels outside the row and resets the row to closed.
    /// On error the previous assignment and state are kept.
    pub fn arrange(&self, row_width: i32, children: &[ChildSpec]) -> Result<(), SlideRowError> {
        let slots = SlotAssignment::classify(children).map_err(|err| {
            log::warn!("rejecting slide row arrangement: {err}");
            err
        })?;

        let mut inner = self.inner.borrow_mut();
        inner.abort_run();
        inner.slots = slots;
        inner.row_width = row_width;
        if let Some(left) = slots.left {
            inner.host.offset_child(left.id, -row_width);
        }
        if let Some(right) = slots.right {
            inner.host.offset_child(right.id, row_width);
        }
        inner.state = RowState::default();
        log::debug!(
            "arranged slide row: width={}, left={:?}, right={:?}, center={:?}",
            row_width,
            slots.left,
            slots.right,
            slots.center
        );
        Ok(())
    }

    pub fn slots(&self) -> SlotAssignment {
        self.inner.borrow().slots
    }

    /// Child ids back to front.
    pub fn draw_order(&self) -> SmallVec<[ChildId; MAX_CHILDREN]> {
        self.inner.borrow().slots.draw_order()
    }

    // ------------------------------------------------------------------
    // Pointer dispatch
    // ------------------------------------------------------------------

    /// Observe an event on its way to a child.
    ///
    /// Returns `true` once the row wants to take over the gesture stream.
    /// A pointer-down is never intercepted so children still see taps.
    pub fn intercept_pointer_event(&self, event: &PointerEvent) -> bool {
        let handled = self.classify(event);
        if event.kind == PointerEventKind::Down {
            return false;
        }
        handled
    }

    /// Handle an event targeted at the row itself.
    ///
    /// Releases settle the row at its nearest anchor unless an animation is
    /// already running, in which case the release is swallowed.
    pub fn pointer_event(&self, event: &PointerEvent) -> bool {
        let handled = self.classify(event);
        if event.kind.is_release() && self.release() {
            return true;
        }
        handled
    }

    fn classify(&self, event: &PointerEvent) -> bool {
        let mut listener = self.clone();
        let mut classifier = self.classifier.borrow_mut();
        classifier.on_pointer_event(event, &mut listener)
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Start of a gesture stream: stop any settle and forget the mode.
    pub fn on_down(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.abort_run();
        inner.state.mode = Mode::Undecided;
        true
    }

    /// A plain tap goes back to ancestors.
    pub fn on_single_tap_up(&self) -> bool {
        self.inner
            .borrow_mut()
            .host
            .request_input_exclusivity(false);
        false
    }

    /// Live drag. Distances use the previous-minus-current convention.
    pub fn on_scroll(&self, distance_x: f32, distance_y: f32) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.state.mode == Mode::Undecided {
            inner.resolve_mode(distance_x, distance_y, true);
        }
        if inner.state.mode == Mode::None {
            return false;
        }

        // Distances may be huge or infinite.
        let candidate = inner.state.offset.saturating_sub(distance_x as i32);
        let target = inner.clamp_to_mode(candidate);
        log::trace!("drag to {} (requested {})", target, candidate);
        inner.move_center_to(target);
        true
    }

    /// Inertial release. Targets depend only on the velocity sign.
    ///
    /// Unlike drags, a fling opens a side whenever its panel exists, even if
    /// revealing that side is disabled, and reports handled even when no
    /// side could be resolved.
    pub fn on_fling(&self, velocity_x: f32, velocity_y: f32) -> bool {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.mode == Mode::Undecided {
                inner.resolve_mode(velocity_x, velocity_y, false);
            }
            if inner.state.mode == Mode::None {
                return true;
            }

            let target = inner.fling_target(velocity_x);
            let duration = inner.config.fling_duration_millis;
            log::debug!(
                "fling {:?} from {} to {} over {}ms",
                inner.state.mode,
                inner.state.offset,
                target,
                duration
            );
            inner.start_run(target, duration)
        };
        self.schedule_tick(generation);
        true
    }

    /// Settle after the pointer is released or cancelled.
    ///
    /// Returns whether the release was consumed by the row.
    pub fn release(&self) -> bool {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.is_animating() {
                return true;
            }
            if inner.state.mode == Mode::None {
                return false;
            }

            let target = inner.snap_target();
            if target == inner.state.offset {
                return true;
            }
            let duration = inner.config.snap_duration_millis;
            log::debug!(
                "snap from {} to {} over {}ms",
                inner.state.offset,
                target,
                duration
            );
            inner.start_run(target, duration)
        };
        self.schedule_tick(generation);
        true
    }

    // ------------------------------------------------------------------
    // Tick loop
    // ------------------------------------------------------------------

    fn schedule_tick(&self, generation: u64) {
        let clock = {
            let inner = self.inner.borrow();
            if inner.run_generation != generation {
                return;
            }
            inner.frame_clock.clone()
        };
        let weak = self.downgrade();
        let registration = clock.with_frame_millis(move |now_millis| {
            if let Some(row) = weak.upgrade() {
                row.on_tick(generation, now_millis);
            }
        });
        self.inner.borrow_mut().registration = Some(registration);
    }

    fn on_tick(&self, generation: u64, now_millis: u64) {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            if inner.run_generation != generation {
                return;
            }
            inner.registration = None;
            if !inner.scroller.compute_scroll_offset(now_millis) {
                return;
            }

            // The run's target was clamped when it was chosen.
            let position = inner.scroller.curr();
            log::trace!("settle tick at {}ms: offset {}", now_millis, position);
            inner.move_center_to(position);

            if inner.scroller.is_finished() {
                TickOutcome::Settled(inner.state.side_state(), inner.listener.clone())
            } else {
                TickOutcome::Continue
            }
        };

        match outcome {
            TickOutcome::Continue => self.schedule_tick(generation),
            TickOutcome::Settled(side, listener) => {
                log::debug!("slide row settled: {:?}", side);
                if let Some(listener) = listener {
                    match side {
                        SideState::Closed => listener.on_close(self),
                        SideState::LeftOpen(size) => listener.on_left_open(self, size),
                        SideState::RightOpen(size) => listener.on_right_open(self, size),
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> RowState {
        self.inner.borrow().state
    }

    pub fn offset(&self) -> i32 {
        self.inner.borrow().state.offset
    }

    pub fn mode(&self) -> Mode {
        self.inner.borrow().state.mode
    }

    pub fn side_state(&self) -> SideState {
        self.inner.borrow().state.side_state()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().is_animating()
    }

    /// Final offset of the running settle, if any.
    pub fn animation_target(&self) -> Option<i32> {
        let inner = self.inner.borrow();
        inner
            .is_animating()
            .then(|| inner.scroller.final_position())
    }

    /// Duration of the running settle, if any.
    pub fn animation_duration_millis(&self) -> Option<u64> {
        let inner = self.inner.borrow();
        inner
            .is_animating()
            .then(|| inner.scroller.duration_millis())
    }

    pub fn config(&self) -> SlideRowConfig {
        self.inner.borrow().config
    }

    pub fn set_config(&self, config: SlideRowConfig) {
        self.inner.borrow_mut().config = config;
    }

    pub fn is_left_reveal_allowed(&self) -> bool {
        self.inner.borrow().config.allow_left_reveal
    }

    pub fn set_left_reveal_allowed(&self, allow: bool) {
        self.inner.borrow_mut().config.allow_left_reveal = allow;
    }

    pub fn is_right_reveal_allowed(&self) -> bool {
        self.inner.borrow().config.allow_right_reveal
    }

    pub fn set_right_reveal_allowed(&self, allow: bool) {
        self.inner.borrow_mut().config.allow_right_reveal = allow;
    }

    pub fn listener(&self) -> Option<Rc<dyn SideOpenListener>> {
        self.inner.borrow().listener.clone()
    }

    pub fn set_listener(&self, listener: Option<Rc<dyn SideOpenListener>>) {
        self.inner.borrow_mut().listener = listener;
    }
}

impl GestureListener for SlideRow {
    fn on_down(&mut self) -> bool {
        SlideRow::on_down(self)
    }

    fn on_single_tap_up(&mut self) -> bool {
        SlideRow::on_single_tap_up(self)
    }

    fn on_scroll(&mut self, distance_x: f32, distance_y: f32) -> bool {
        SlideRow::on_scroll(self, distance_x, distance_y)
    }

    fn on_fling(&mut self, velocity_x: f32, velocity_y: f32) -> bool {
        SlideRow::on_fling(self, velocity_x, velocity_y)
    }
}

impl std::fmt::Debug for SlideRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SlideRow")
            .field("state", &inner.state)
            .field("slots", &inner.slots)
            .field("row_width", &inner.row_width)
            .field("animating", &inner.is_animating())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/row_tests.rs"]
mod tests;
