//! Pixel sinks: the buffers a [`Rasterizer`](crate::render::Rasterizer) writes into.
//!
//! A canvas is a square, row-major grid addressed by `x + edge_length * y`.
//! The rasterizer only ever marks pixels; what a mark means (color, material
//! id, coverage) belongs to the caller.

/// Value written for every rasterized pixel of a byte canvas.
pub const INK: u8 = 0;

/// Destination for rasterized pixels.
///
/// Implemented for byte buffers, where a mark stores [`INK`]. Custom sinks
/// can count or record writes instead.
pub trait PixelSink {
    /// Number of addressable pixels.
    fn pixel_capacity(&self) -> usize;

    /// Mark the pixel at a linear index.
    ///
    /// The rasterizer guarantees `index < pixel_capacity()`.
    fn mark(&mut self, index: usize);
}

impl PixelSink for [u8] {
    fn pixel_capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self[index] = INK;
    }
}

impl PixelSink for Vec<u8> {
    fn pixel_capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self[index] = INK;
    }
}

impl<const N: usize> PixelSink for [u8; N] {
    fn pixel_capacity(&self) -> usize {
        N
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        self[index] = INK;
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn pixel_capacity(&self) -> usize {
        (**self).pixel_capacity()
    }

    #[inline]
    fn mark(&mut self, index: usize) {
        (**self).mark(index);
    }
}

/// Sink that counts writes per pixel.
#[cfg(test)]
pub(crate) struct HitCounter(pub(crate) Vec<u32>);

#[cfg(test)]
impl PixelSink for HitCounter {
    fn pixel_capacity(&self) -> usize {
        self.0.len()
    }

    fn mark(&mut self, index: usize) {
        self.0[index] += 1;
    }
}
