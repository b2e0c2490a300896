//! Clipped single-pixel Bresenham lines and filled rectangles.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal, 4(1), 25-30.

use crate::canvas::PixelSink;
use crate::error::{Error, Result};
use crate::geometry::{Line, Point};

use super::overlap::Overlap;

/// Integer error accumulator for one Bresenham walk.
///
/// `major` and `minor` are the absolute axis deltas, `major >= minor`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bresenham {
    error: i64,
    major_times2: i64,
    minor_times2: i64,
}

impl Bresenham {
    pub(crate) const fn new(major: i32, minor: i32) -> Self {
        let (major, minor) = (major as i64, minor as i64);
        Self {
            // start value represents a half step in minor direction
            error: 2 * minor - major,
            major_times2: 2 * major,
            minor_times2: 2 * minor,
        }
    }

    /// Advance one major-axis step. Returns true if the minor axis moves too.
    #[inline]
    pub(crate) fn step(&mut self) -> bool {
        let minor_moves = self.error >= 0;
        if minor_moves {
            self.error -= self.major_times2;
        }
        self.error += self.minor_times2;
        minor_moves
    }
}

/// Rasterizer over a borrowed square canvas.
///
/// The canvas is `edge_length × edge_length` pixels, row-major, addressed
/// as `x + edge_length * y`. Every public drawing operation clamps its
/// coordinates first, so writes always land inside the canvas. The
/// rasterizer keeps no state between calls.
///
/// # Example
///
/// ```
/// use bresenham_raster::prelude::*;
///
/// let mut canvas = vec![1u8; 100];
/// let mut raster = Rasterizer::new(&mut canvas[..], 10).unwrap();
/// raster.draw_line(1, 1, 8, 1);
///
/// assert_eq!(canvas[11], INK);
/// assert_eq!(canvas[18], INK);
/// assert_eq!(canvas[19], 1);
/// ```
#[derive(Debug)]
pub struct Rasterizer<'a, S: PixelSink + ?Sized = [u8]> {
    canvas: &'a mut S,
    edge_length: i32,
}

impl<'a, S: PixelSink + ?Sized> Rasterizer<'a, S> {
    /// Create a rasterizer over `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge_length` is zero or exceeds `i32::MAX`, or if
    /// the canvas holds fewer than `edge_length²` pixels.
    pub fn new(canvas: &'a mut S, edge_length: u32) -> Result<Self> {
        let edge = i32::try_from(edge_length)
            .ok()
            .filter(|&e| e > 0)
            .ok_or(Error::InvalidEdgeLength { edge_length })?;

        let len = canvas.pixel_capacity();
        let required = (edge_length as usize)
            .checked_mul(edge_length as usize)
            .unwrap_or(usize::MAX);
        if len < required {
            return Err(Error::CanvasTooSmall { len, required });
        }

        log::debug!("rasterizer over {edge_length}x{edge_length} canvas ({len} pixels)");

        Ok(Self {
            canvas,
            edge_length: edge,
        })
    }

    /// Edge length of the square canvas.
    #[must_use]
    pub const fn edge_length(&self) -> u32 {
        self.edge_length as u32
    }

    /// Borrow the canvas.
    #[must_use]
    pub fn canvas(&self) -> &S {
        &*self.canvas
    }

    /// Give the canvas borrow back.
    pub fn into_inner(self) -> &'a mut S {
        self.canvas
    }

    /// Mark one pixel. Coordinates must already be inside the canvas.
    #[inline]
    pub(crate) fn draw_pixel(&mut self, x: i32, y: i32) {
        debug_assert!(
            (0..self.edge_length).contains(&x) && (0..self.edge_length).contains(&y),
            "pixel ({x}, {y}) outside {0}x{0} canvas",
            self.edge_length
        );
        self.canvas.mark(x as usize + self.edge_length as usize * y as usize);
    }

    /// Mark one pixel given in (major, minor) order.
    #[inline]
    fn draw_pixel_oriented(&mut self, x_major: bool, major: i32, minor: i32) {
        if x_major {
            self.draw_pixel(major, minor);
        } else {
            self.draw_pixel(minor, major);
        }
    }

    /// Fill the inclusive rectangle spanned by two corners, in any order.
    ///
    /// No clipping: both corners must already be inside the canvas.
    pub(crate) fn fill_rect(&mut self, a: Point, b: Point) {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                self.draw_pixel(x, y);
            }
        }
    }

    /// Draw a clipped one-pixel line from `(x0, y0)` to `(x1, y1)`.
    ///
    /// Endpoints outside the canvas are clamped to its border (see
    /// [`draw_line_overlap`](Self::draw_line_overlap)).
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.draw_line_overlap(Point::new(x0, y0), Point::new(x1, y1), Overlap::NONE);
    }

    /// Draw a clipped one-pixel line, adding `overlap` pixels on every
    /// minor-axis step.
    ///
    /// Each endpoint is clamped on its own into `0..edge_length`. This moves
    /// far-out endpoints to the nearest border instead of clipping the
    /// segment, so such lines can change slope. Horizontal and vertical
    /// lines are filled as rectangles.
    pub fn draw_line_overlap(&mut self, start: Point, end: Point, overlap: Overlap) {
        let requested = Line::new(start, end);
        let clamped = requested.clamp_to(self.edge_length);
        if clamped != requested {
            log::trace!("clamped {requested:?} to {clamped:?}");
        }
        let Line { start, end } = clamped;

        if clamped.is_axis_aligned() {
            self.fill_rect(start, end);
            return;
        }

        let delta = clamped.delta();
        let step_x = delta.x.signum();
        let step_y = delta.y.signum();
        let (dx, dy) = (delta.x.abs(), delta.y.abs());

        let x_major = dx > dy;
        let (mut major, end_major, step_major, mut minor, step_minor, mut bresenham) = if x_major {
            (start.x, end.x, step_x, start.y, step_y, Bresenham::new(dx, dy))
        } else {
            (start.y, end.y, step_y, start.x, step_x, Bresenham::new(dy, dx))
        };

        self.draw_pixel(start.x, start.y);
        while major != end_major {
            major += step_major;
            if bresenham.step() {
                if overlap.contains(Overlap::MAJOR) {
                    self.draw_pixel_oriented(x_major, major, minor);
                }
                minor += step_minor;
                if overlap.contains(Overlap::MINOR) {
                    self.draw_pixel_oriented(x_major, major - step_major, minor);
                }
            }
            self.draw_pixel_oriented(x_major, major, minor);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::canvas::INK;
    use proptest::prelude::*;

    const EDGE: u32 = 32;

    fn render(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<u8> {
        let mut buf = vec![1u8; (EDGE * EDGE) as usize];
        Rasterizer::new(&mut buf[..], EDGE).unwrap().draw_line(x0, y0, x1, y1);
        buf
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Pixel count equals the major-axis span plus one.
        #[test]
        fn prop_pixel_count_is_major_span(
            x0 in 0i32..32, y0 in 0i32..32, x1 in 0i32..32, y1 in 0i32..32
        ) {
            let buf = render(x0, y0, x1, y1);
            let inked = buf.iter().filter(|&&v| v == INK).count();
            let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
            let expected = if dx == 0 || dy == 0 {
                ((dx + 1) * (dy + 1)) as usize
            } else {
                (dx.max(dy) + 1) as usize
            };
            prop_assert_eq!(inked, expected);
        }

        /// Any coordinate outside the canvas acts like the nearest border value.
        #[test]
        fn prop_clamping_equivalence(
            x0 in -64i32..96, y0 in -64i32..96, x1 in -64i32..96, y1 in -64i32..96
        ) {
            let clamp = |v: i32| v.clamp(0, EDGE as i32 - 1);
            prop_assert_eq!(
                render(x0, y0, x1, y1),
                render(clamp(x0), clamp(y0), clamp(x1), clamp(y1))
            );
        }
    }
}
