//! # Bresenham-Raster
//!
//! Integer-only line rasterization onto flat, byte-per-pixel square canvases.
//!
//! The caller owns the canvas; a [`Rasterizer`](render::Rasterizer) borrows it,
//! marks pixels with [`INK`](canvas::INK) and never resizes it.
//!
//! ## Features
//!
//! - **Clipped Bresenham lines**: endpoints are clamped to the canvas
//! - **Overlap control**: extra pixels on minor-axis steps
//! - **Thick lines**: centered or one-sided, no gaps and no pixel drawn twice
//! - **Simple thick lines**: cheaper variant that may draw pixels twice
//!
//! ## Quick Start
//!
//! ```rust
//! use bresenham_raster::prelude::*;
//!
//! let mut canvas = vec![1u8; 20 * 20];
//! let mut raster = Rasterizer::new(&mut canvas[..], 20)?;
//!
//! raster.draw_line(-5, -5, 25, 3);
//! raster.draw_thick_line(2, 6, 17, 14, 4, ThicknessMode::Middle);
//!
//! assert_eq!(canvas[0], INK);
//! # Ok::<(), bresenham_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for points, lines and thickness modes
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade at `debug` and `trace` level.
//! No logger is installed by this crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_arguments)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pixel sinks that rasterizers write into.
pub mod canvas;

/// Integer geometric primitives (points, lines).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, rectangle and thick-line rasterization.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for bresenham-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use bresenham_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{PixelSink, INK};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point};
    pub use crate::render::{Drawable, Overlap, Rasterizer, ThickLine, ThicknessMode};
}
