//! Child placement gravity.
//!
//! Gravity is a bitfield: horizontal and vertical placement live in separate
//! bit groups so a child can say "left, vertically centered" in one value.
//! Rows only look at the horizontal group.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gravity(u32);

impl Gravity {
    pub const NO_GRAVITY: Self = Self(0x0000);

    pub const CENTER_HORIZONTAL: Self = Self(0x0001);
    pub const LEFT: Self = Self(0x0003);
    pub const RIGHT: Self = Self(0x0005);
    pub const FILL_HORIZONTAL: Self = Self(0x0007);
    pub const HORIZONTAL_MASK: Self = Self(0x0007);

    pub const CENTER_VERTICAL: Self = Self(0x0010);
    pub const TOP: Self = Self(0x0030);
    pub const BOTTOM: Self = Self(0x0050);
    pub const FILL_VERTICAL: Self = Self(0x0070);
    pub const VERTICAL_MASK: Self = Self(0x0070);

    pub const CENTER: Self = Self(Self::CENTER_HORIZONTAL.0 | Self::CENTER_VERTICAL.0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Only the horizontal bit group.
    pub const fn horizontal(self) -> Self {
        Self(self.0 & Self::HORIZONTAL_MASK.0)
    }

    pub const fn vertical(self) -> Self {
        Self(self.0 & Self::VERTICAL_MASK.0)
    }
}

impl std::ops::BitOr for Gravity {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gravity({:#06x})", self.0)
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal = match self.horizontal() {
            Self::CENTER_HORIZONTAL => "center_horizontal",
            Self::LEFT => "left",
            Self::RIGHT => "right",
            Self::FILL_HORIZONTAL => "fill_horizontal",
            Self::NO_GRAVITY => "none",
            _ => "unknown",
        };
        write!(f, "{horizontal} ({:#06x})", self.0)
    }
}

#[cfg(test)]
#[path = "tests/gravity_tests.rs"]
mod tests;
