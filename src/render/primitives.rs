//! Drawable line primitives.
//!
//! Value types that know how to rasterize themselves, for callers that keep
//! lists of shapes rather than calling the rasterizer directly.

use crate::canvas::PixelSink;
use crate::geometry::Line;

use super::mode::ThicknessMode;
use super::rasterizer::Rasterizer;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a rasterizer.
    fn draw<S: PixelSink + ?Sized>(&self, raster: &mut Rasterizer<'_, S>);
}

impl Drawable for Line {
    fn draw<S: PixelSink + ?Sized>(&self, raster: &mut Rasterizer<'_, S>) {
        raster.draw_line(self.start.x, self.start.y, self.end.x, self.end.y);
    }
}

/// A line with thickness, configured builder-style.
///
/// # Example
///
/// ```
/// use bresenham_raster::prelude::*;
///
/// let stroke = ThickLine::new(Line::from_coords(2, 5, 12, 5))
///     .with_thickness(3)
///     .with_mode(ThicknessMode::Clockwise);
///
/// let mut canvas = vec![1u8; 16 * 16];
/// stroke.draw(&mut Rasterizer::new(&mut canvas[..], 16).unwrap());
///
/// assert_eq!(canvas[2 + 16 * 7], INK);
/// assert_eq!(canvas[2 + 16 * 4], 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThickLine {
    line: Line,
    thickness: i32,
    mode: ThicknessMode,
    simple: bool,
}

impl ThickLine {
    /// Create a one-pixel, centered, exact thick line.
    #[must_use]
    pub const fn new(line: Line) -> Self {
        Self {
            line,
            thickness: 1,
            mode: ThicknessMode::Middle,
            simple: false,
        }
    }

    /// Set the thickness in pixels. Values below 2 draw a plain line.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set which side the thickness grows on.
    #[must_use]
    pub const fn with_mode(mut self, mode: ThicknessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use [`Rasterizer::draw_thick_line_simple`] instead of the exact variant.
    #[must_use]
    pub const fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    /// The centre (or border) line.
    #[must_use]
    pub const fn line(&self) -> Line {
        self.line
    }

    /// Configured thickness.
    #[must_use]
    pub const fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Configured thickness mode.
    #[must_use]
    pub const fn mode(&self) -> ThicknessMode {
        self.mode
    }

    /// True if drawn with the duplicate-tolerant variant.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        self.simple
    }
}

impl From<Line> for ThickLine {
    fn from(line: Line) -> Self {
        Self::new(line)
    }
}

impl Drawable for ThickLine {
    fn draw<S: PixelSink + ?Sized>(&self, raster: &mut Rasterizer<'_, S>) {
        let Line { start, end } = self.line;
        if self.simple {
            raster.draw_thick_line_simple(start.x, start.y, end.x, end.y, self.thickness, self.mode);
        } else {
            raster.draw_thick_line(start.x, start.y, end.x, end.y, self.thickness, self.mode);
        }
    }
}

impl<T: Drawable> Drawable for [T] {
    fn draw<S: PixelSink + ?Sized>(&self, raster: &mut Rasterizer<'_, S>) {
        for item in self {
            item.draw(raster);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
