//! Geometric primitives for rasterization.
//!
//! All coordinates live on the integer pixel grid; there is no sub-pixel
//! position anywhere in this crate.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point with integer pixel coordinates.
///
/// `+` and `-` saturate at the `i32` range, so offsetting a point far
/// outside the canvas never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate (column).
    pub x: i32,
    /// Y coordinate (row).
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes independently into `0..edge_length`.
    ///
    /// This relocates the point to the nearest canvas border; it is not
    /// segment clipping, so a line through two clamped endpoints may have a
    /// different slope than the requested one.
    ///
    /// ```
    /// use bresenham_raster::geometry::Point;
    ///
    /// assert_eq!(Point::new(-5, 25).clamp_to(20), Point::new(0, 19));
    /// ```
    #[must_use]
    pub fn clamp_to(self, edge_length: i32) -> Self {
        let max = edge_length - 1;
        Self::new(self.x.clamp(0, max), self.y.clamp(0, max))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two pixel centers, both endpoints inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Vector from start to end.
    #[must_use]
    pub fn delta(&self) -> Point {
        self.end - self.start
    }

    /// True if the endpoints share a row or a column.
    #[must_use]
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Same line with both endpoints clamped into `0..edge_length`.
    #[must_use]
    pub fn clamp_to(self, edge_length: i32) -> Self {
        Self::new(self.start.clamp_to(edge_length), self.end.clamp_to(edge_length))
    }
}
