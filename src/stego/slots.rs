// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Channel slot stream.
//!
//! Linearizes a pixel grid into a sequence of byte slots: for each pixel in
//! row-major order, its red, green and blue channels in that order. Alpha is
//! never part of the stream.
//!
//! ```text
//! slot i  ->  channel = i % 3      (0 = R, 1 = G, 2 = B)
//!             pixel   = i / 3
//!             column  = pixel % width
//!             row     = pixel / width
//! ```
//!
//! The strict mapping ([`locate`]) is a bijection between
//! `0..capacity_slots(w, h)` and `(column, row, channel)` and reports
//! [`StegoError::OutOfRange`] past the last row. The wrapping mapping
//! ([`locate_wrapping`]) reduces the row modulo `height` instead; only the
//! sentinel embedder uses it, because images written by the legacy tool were
//! produced that way.

use crate::raster::{Channel, PixelGrid};
use crate::stego::error::StegoError;

/// Payload channels per pixel (R, G, B).
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Physical location of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPos {
    pub column: usize,
    pub row: usize,
    pub channel: Channel,
}

/// Number of payload slots in a `width × height` image.
pub fn capacity_slots(width: usize, height: usize) -> usize {
    width.saturating_mul(height).saturating_mul(CHANNELS_PER_PIXEL)
}

/// Map slot `i` to its pixel channel, failing past the end of the image.
pub fn locate(i: usize, width: usize, height: usize) -> Result<SlotPos, StegoError> {
    let capacity = capacity_slots(width, height);
    if i >= capacity {
        return Err(StegoError::OutOfRange { slot: i, capacity });
    }
    let pixel = i / CHANNELS_PER_PIXEL;
    Ok(SlotPos {
        column: pixel % width,
        row: pixel / width,
        channel: Channel::PAYLOAD[i % CHANNELS_PER_PIXEL],
    })
}

/// Map slot `i` with column and row both reduced modulo the image size.
///
/// Slots past the end wrap back to the top-left pixel and alias earlier
/// slots. An image with no pixels has nowhere to wrap to and reports
/// [`StegoError::OutOfRange`].
pub fn locate_wrapping(i: usize, width: usize, height: usize) -> Result<SlotPos, StegoError> {
    if width == 0 || height == 0 {
        return Err(StegoError::OutOfRange { slot: i, capacity: 0 });
    }
    let pixel = i / CHANNELS_PER_PIXEL;
    Ok(SlotPos {
        column: pixel % width,
        row: (pixel / width) % height,
        channel: Channel::PAYLOAD[i % CHANNELS_PER_PIXEL],
    })
}

/// Read the byte stored in slot `i`.
pub fn read_slot<G: PixelGrid + ?Sized>(grid: &G, i: usize) -> Result<u8, StegoError> {
    let pos = locate(i, grid.width(), grid.height())?;
    Ok(grid.channel(pos.column, pos.row, pos.channel))
}

/// Overwrite the byte stored in slot `i`. Only that one channel changes.
pub fn write_slot<G: PixelGrid + ?Sized>(grid: &mut G, i: usize, value: u8) -> Result<(), StegoError> {
    let pos = locate(i, grid.width(), grid.height())?;
    grid.set_channel(pos.column, pos.row, pos.channel, value);
    Ok(())
}

/// Overwrite slot `i` using the wrapping mapping. Fails only on an empty grid.
pub fn write_slot_wrapping<G: PixelGrid + ?Sized>(grid: &mut G, i: usize, value: u8) -> Result<(), StegoError> {
    let pos = locate_wrapping(i, grid.width(), grid.height())?;
    grid.set_channel(pos.column, pos.row, pos.channel, value);
    Ok(())
}

/// Read `len` consecutive slots starting at `start`.
pub fn read_run<G: PixelGrid + ?Sized>(grid: &G, start: usize, len: usize) -> Result<Vec<u8>, StegoError> {
    (start..start.saturating_add(len)).map(|i| read_slot(grid, i)).collect()
}

/// Write `bytes` to consecutive slots starting at `start`.
///
/// The whole run is bounds-checked before the first write, so on error the
/// grid is unchanged.
pub fn write_run<G: PixelGrid + ?Sized>(grid: &mut G, start: usize, bytes: &[u8]) -> Result<(), StegoError> {
    if bytes.is_empty() {
        return Ok(());
    }
    let last = start.saturating_add(bytes.len() - 1);
    locate(last, grid.width(), grid.height())?;
    for (offset, &b) in bytes.iter().enumerate() {
        write_slot(grid, start + offset, b)?;
    }
    Ok(())
}
