/// Which side the current gesture stream may drag open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No directional signal seen since the last pointer-down.
    #[default]
    Undecided,
    /// The stream is not ours to move (vertical, or the side is unavailable).
    None,
    LeftOpen,
    RightOpen,
}

/// Mutable interaction state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    /// Center displacement: 0 closed, > 0 left revealed, < 0 right revealed.
    pub offset: i32,
    pub mode: Mode,
    /// Left panel parked outside the row.
    pub left_hidden: bool,
    /// Right panel parked outside the row.
    pub right_hidden: bool,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            offset: 0,
            mode: Mode::Undecided,
            left_hidden: true,
            right_hidden: true,
        }
    }
}

impl RowState {
    pub fn side_state(&self) -> SideState {
        SideState::from_offset(self.offset)
    }
}

/// How open a row is, as reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideState {
    Closed,
    /// Left panel revealed by this many pixels.
    LeftOpen(i32),
    /// Right panel revealed by this many pixels.
    RightOpen(i32),
}

impl SideState {
    pub fn from_offset(offset: i32) -> Self {
        match offset {
            0 => SideState::Closed,
            offset if offset > 0 => SideState::LeftOpen(offset),
            offset => SideState::RightOpen(-offset),
        }
    }
}
