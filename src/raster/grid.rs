// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Owned RGBA pixel storage.

use super::error::{RasterError, Result};
use super::{Channel, PixelGrid};

/// Bytes per stored pixel (R, G, B, A).
const BYTES_PER_PIXEL: usize = 4;

/// An owned `width × height` pixel grid.
///
/// Pixels are stored row-major, interleaved as `R G B A`, which is the
/// layout PNG decoders produce for 8-bit RGBA images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaGrid {
    /// Create a grid of opaque black pixels.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = buffer_len(width, height)?;
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[3] = 0xFF;
        }
        Ok(Self { width, height, data })
    }

    /// Wrap an existing interleaved RGBA buffer.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Interleaved RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The four channels of pixel `(x, y)` as `[r, g, b, a]`.
    pub fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_rgba(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width, "column {x} >= {}", self.width);
        debug_assert!(y < self.height, "row {y} >= {}", self.height);
        (y * self.width + x) * BYTES_PER_PIXEL
    }
}

impl PixelGrid for RgbaGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn channel(&self, x: usize, y: usize, channel: Channel) -> u8 {
        self.data[self.index(x, y) + channel.rgba_offset()]
    }

    fn set_channel(&mut self, x: usize, y: usize, channel: Channel, value: u8) {
        let i = self.index(x, y) + channel.rgba_offset();
        self.data[i] = value;
    }
}

fn buffer_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(RasterError::InvalidDimensions)
}
