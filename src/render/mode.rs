//! Placement of thickness relative to the requested line.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which side of the requested line a thick line grows into.
///
/// Clockwise and counterclockwise are meant for a top-left origin with `y`
/// growing downward, looking along the line from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThicknessMode {
    /// Thickness is centered on the line.
    #[default]
    Middle,
    /// Line runs along the border, thickness grows clockwise.
    Clockwise,
    /// Line runs along the border, thickness grows counterclockwise.
    Counterclockwise,
}

impl ThicknessMode {
    /// All modes, in numeric code order.
    pub const ALL: [Self; 3] = [Self::Middle, Self::Clockwise, Self::Counterclockwise];

    /// How many of the `thickness` parallel copies lie before the requested
    /// line, measured along the counterclockwise perpendicular.
    #[must_use]
    pub const fn draw_start_adjust_count(self, thickness: i32) -> i32 {
        match self {
            Self::Counterclockwise => thickness - 1,
            Self::Clockwise => 0,
            Self::Middle => thickness / 2,
        }
    }

    /// Numeric code, the inverse of `TryFrom<u8>`.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ThicknessMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Middle),
            1 => Ok(Self::Clockwise),
            2 => Ok(Self::Counterclockwise),
            other => Err(Error::InvalidThicknessMode(other)),
        }
    }
}

impl FromStr for ThicknessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "middle" => Ok(Self::Middle),
            "clockwise" | "cw" => Ok(Self::Clockwise),
            "counterclockwise" | "ccw" => Ok(Self::Counterclockwise),
            _ => Err(Error::UnknownThicknessMode(s.to_owned())),
        }
    }
}

impl fmt::Display for ThicknessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Middle => "middle",
            Self::Clockwise => "clockwise",
            Self::Counterclockwise => "counterclockwise",
        })
    }
}
