#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    /// Whether this event ends the gesture stream.
    pub fn is_release(self) -> bool {
        matches!(self, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

/// Raw pointer event as delivered by the host, in row-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub time_millis: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            time_millis: 0,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::default())
    }

    pub fn with_time(mut self, time_millis: u64) -> Self {
        self.time_millis = time_millis;
        self
    }
}
