// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! In-memory pixel grids.
//!
//! The steganography layer never touches image files. It works on anything
//! implementing [`PixelGrid`]: a `width × height` array of pixels, each with
//! four independent 8-bit channels (alpha, red, green, blue) addressed by
//! column and row.
//!
//! [`RgbaGrid`] is the owned implementation used by the PNG adapter
//! (`png` feature) and by the tests. Callers holding their own pixel buffer
//! can implement the trait directly and embed in place.

pub mod error;
pub mod grid;
#[cfg(feature = "png")]
pub mod png;

pub use error::RasterError;
pub use grid::RgbaGrid;

/// One of a pixel's four 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// The payload-carrying channels, in slot order. Alpha is never used.
    pub const PAYLOAD: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel inside an interleaved RGBA pixel.
    pub(crate) fn rgba_offset(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Alpha => 3,
        }
    }
}

/// A mutable rectangular grid of ARGB pixels.
///
/// Implementations must accept every `x < width()` and `y < height()`.
/// Out-of-bounds coordinates are a caller bug and may panic; the slot layer
/// in [`crate::stego::slots`] checks bounds before calling in. A grid that
/// reports zero columns or rows is never read or written.
pub trait PixelGrid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Read one channel of the pixel at column `x`, row `y`.
    fn channel(&self, x: usize, y: usize, channel: Channel) -> u8;

    /// Overwrite one channel of the pixel at column `x`, row `y`, leaving the
    /// other three untouched.
    fn set_channel(&mut self, x: usize, y: usize, channel: Channel, value: u8);
}
