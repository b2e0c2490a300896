//! Rasterization of straight lines onto square byte canvases.
//!
//! Integer arithmetic only: no anti-aliasing, no sub-pixel positions.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: clipped one-pixel lines, with optional overlap
//!   pixels on minor-axis steps
//! - **Filled Rectangle**: fast path for horizontal and vertical lines
//! - **Thick Bresenham**: parallel copies offset along the perpendicular,
//!   gap-free with every pixel written once, plus a simpler duplicate-tolerant
//!   variant
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod mode;
mod overlap;
mod primitives;
mod rasterizer;
mod thick_line;

pub use mode::ThicknessMode;
pub use overlap::Overlap;
pub use primitives::{Drawable, ThickLine};
pub use rasterizer::Rasterizer;
