//! Thick lines built from parallel one-pixel Bresenham copies.
//!
//! The copies are offset from the requested line by a second Bresenham walk
//! along the line's perpendicular direction. Whenever that walk moves on its
//! minor axis, the next copy is drawn with [`Overlap::MAJOR`] so that the
//! diagonal step leaves no hole between neighbouring copies.
//!
//! ```text
//!  1,2  pixels of the first two copies
//!  3    pixels of the third copy
//!  -    pixels added by Overlap::MAJOR
//!
//!            33
//!        3333-22
//!    3333-222211
//!  33-22221111
//!   221111
//!   11
//! ```

use crate::canvas::PixelSink;
use crate::geometry::Point;

use super::mode::ThicknessMode;
use super::overlap::Overlap;
use super::rasterizer::{Bresenham, Rasterizer};

/// Bresenham walk along the perpendicular of a line, one copy per step.
#[derive(Debug, Clone, Copy)]
struct PerpendicularWalk {
    x_major: bool,
    delta_x: i32,
    delta_y: i32,
    step_x: i32,
    step_y: i32,
}

impl PerpendicularWalk {
    fn stepper(&self) -> Bresenham {
        if self.x_major {
            Bresenham::new(self.delta_x, self.delta_y)
        } else {
            Bresenham::new(self.delta_y, self.delta_x)
        }
    }

    /// Offset to the next copy, and whether the walk moved on its minor axis.
    fn advance(&self, stepper: &mut Bresenham) -> (Point, bool) {
        let minor_moves = stepper.step();
        let offset = match (self.x_major, minor_moves) {
            (true, false) => Point::new(self.step_x, 0),
            (true, true) => Point::new(self.step_x, self.step_y),
            (false, false) => Point::new(0, self.step_y),
            (false, true) => Point::new(self.step_x, self.step_y),
        };
        (offset, minor_moves)
    }
}

/// Mirror `to - from` into the first quadrant: `(|delta|, step sign, negated)`.
///
/// The magnitude saturates at `i32::MAX`.
fn mirror(from: i32, to: i32) -> (i32, i32, bool) {
    let delta = i64::from(to) - i64::from(from);
    let magnitude = i32::try_from(delta.unsigned_abs()).unwrap_or(i32::MAX);
    if delta < 0 {
        (magnitude, -1, true)
    } else {
        (magnitude, 1, false)
    }
}

impl<S: PixelSink + ?Sized> Rasterizer<'_, S> {
    /// Draw a clipped thick line. No pixel is missed and none is drawn twice.
    ///
    /// `thickness <= 1` draws a plain [`draw_line`](Self::draw_line). Every
    /// copy is clamped on its own, so copies pushed past the canvas border
    /// collapse onto it.
    ///
    /// ```
    /// use bresenham_raster::prelude::*;
    ///
    /// let mut canvas = vec![1u8; 16 * 16];
    /// let mut raster = Rasterizer::new(&mut canvas[..], 16).unwrap();
    /// raster.draw_thick_line(2, 2, 2, 10, 3, ThicknessMode::Middle);
    ///
    /// for y in 2..=10 {
    ///     for x in 0..16 {
    ///         let expected = if (1..=3).contains(&x) { INK } else { 1 };
    ///         assert_eq!(canvas[x + 16 * y], expected);
    ///     }
    /// }
    /// ```
    pub fn draw_thick_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: i32,
        mode: ThicknessMode,
    ) {
        if thickness <= 1 {
            self.draw_line(x0, y0, x1, y1);
            return;
        }

        // Swap the deltas for a perpendicular vector; with a top-left origin
        // the orientation of MAJOR overlap toggles with every mirrored axis.
        let (delta_x, mut step_x, flip_x) = mirror(y0, y1);
        let (delta_y, mut step_y, flip_y) = mirror(x0, x1);
        let swapped = !(flip_x ^ flip_y);

        let mut adjust_count = mode.draw_start_adjust_count(thickness);
        let x_major = delta_x >= delta_y;

        // Copies advance counterclockwise of the requested line.
        if x_major == swapped {
            adjust_count = (thickness - 1) - adjust_count;
            step_y = -step_y;
        } else {
            step_x = -step_x;
        }

        log::trace!(
            "thick line ({x0}, {y0})-({x1}, {y1}) thickness {thickness} {mode}: \
             perpendicular ({delta_x}, {delta_y}) x_major={x_major} swapped={swapped} \
             adjust={adjust_count}"
        );

        let walk = PerpendicularWalk {
            x_major,
            delta_x,
            delta_y,
            step_x,
            step_y,
        };
        self.draw_offset_copies(
            Point::new(x0, y0),
            Point::new(x1, y1),
            walk,
            adjust_count,
            thickness,
            Overlap::MAJOR,
        );
    }

    /// Draw a thick line the quick way, allowing pixels to be drawn twice.
    ///
    /// Copies use [`Overlap::BOTH`] on diagonal perpendicular steps and no
    /// octant correction is applied, so for [`ThicknessMode::Clockwise`] and
    /// [`ThicknessMode::Counterclockwise`] (which behave the same here, both
    /// starting at the requested line) the side the thickness grows on
    /// depends on the line's direction. Only [`ThicknessMode::Middle`] shifts
    /// the first copy. Offsets are not clamped beyond the per-copy clamping
    /// done by [`draw_line_overlap`](Self::draw_line_overlap).
    pub fn draw_thick_line_simple(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: i32,
        mode: ThicknessMode,
    ) {
        let (delta_x, step_x, _) = mirror(y0, y1);
        let (delta_y, step_y, _) = mirror(x1, x0);

        let adjust_count = match mode {
            ThicknessMode::Middle => thickness / 2,
            ThicknessMode::Clockwise | ThicknessMode::Counterclockwise => 0,
        };

        let walk = PerpendicularWalk {
            x_major: delta_x > delta_y,
            delta_x,
            delta_y,
            step_x,
            step_y,
        };
        self.draw_offset_copies(
            Point::new(x0, y0),
            Point::new(x1, y1),
            walk,
            adjust_count,
            thickness,
            Overlap::BOTH,
        );
    }

    /// Walk back `adjust_count` copies, then draw `thickness` copies forward.
    fn draw_offset_copies(
        &mut self,
        mut start: Point,
        mut end: Point,
        walk: PerpendicularWalk,
        adjust_count: i32,
        thickness: i32,
        step_overlap: Overlap,
    ) {
        let mut stepper = walk.stepper();
        for _ in 0..adjust_count {
            let (offset, _) = walk.advance(&mut stepper);
            start -= offset;
            end -= offset;
        }

        self.draw_line_overlap(start, end, Overlap::NONE);

        let mut stepper = walk.stepper();
        for _ in 1..thickness {
            let (offset, minor_moved) = walk.advance(&mut stepper);
            start += offset;
            end += offset;
            let overlap = if minor_moved { step_overlap } else { Overlap::NONE };
            self.draw_line_overlap(start, end, overlap);
        }
    }
}
