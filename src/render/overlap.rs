//! Overlap flags for Bresenham steps that change the minor axis.
//!
//! ```text
//!  Sample line, X major:
//!    00+
//!     -0000+
//!         -0000+
//!             -00
//!
//!  0  drawn for every line
//!  +  drawn additionally with MAJOR
//!  -  drawn additionally with MINOR
//! ```

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of extra pixels to draw when Bresenham advances the minor axis.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Overlap(u8);

impl Overlap {
    /// Plain Bresenham line, no extra pixels.
    pub const NONE: Self = Self(0);

    /// Draw the new major-axis pixel before the minor axis changes.
    pub const MAJOR: Self = Self(1 << 1);

    /// Draw the previous major-axis pixel after the minor axis changed.
    pub const MINOR: Self = Self(1 << 2);

    /// Both extra pixels.
    pub const BOTH: Self = Self(Self::MAJOR.0 | Self::MINOR.0);

    /// True if every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Overlap {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Overlap {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::MAJOR), self.contains(Self::MINOR)) {
            (false, false) => f.write_str("Overlap(NONE)"),
            (true, false) => f.write_str("Overlap(MAJOR)"),
            (false, true) => f.write_str("Overlap(MINOR)"),
            (true, true) => f.write_str("Overlap(MAJOR | MINOR)"),
        }
    }
}
