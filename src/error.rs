//! Error types for bresenham-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a rasterizer.
///
/// Drawing itself never fails: out-of-range coordinates are clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Edge length is zero or does not fit the coordinate type.
    #[error("Invalid edge length: {edge_length}")]
    InvalidEdgeLength {
        /// Requested edge length.
        edge_length: u32,
    },

    /// Canvas buffer is shorter than `edge_length * edge_length`.
    #[error("Canvas too small: {len} bytes, need {required}")]
    CanvasTooSmall {
        /// Length of the supplied buffer.
        len: usize,
        /// Required length (saturated at `usize::MAX`).
        required: usize,
    },

    /// Unrecognized numeric thickness mode.
    #[error("Invalid thickness mode: {0}")]
    InvalidThicknessMode(u8),

    /// Unrecognized thickness mode name.
    #[error("Unknown thickness mode: {0:?}")]
    UnknownThicknessMode(String),
}
