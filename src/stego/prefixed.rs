// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Length-prefixed codec.
//!
//! Writes the message length into the reserved header (see
//! [`frame`](crate::stego::frame)) and then one payload byte per channel
//! slot from slot 12 onward. Decoding trusts the stored length completely:
//! no terminator is consulted and the plausibility score is informational.

use crate::raster::PixelGrid;
use crate::stego::capacity::prefixed_capacity;
use crate::stego::decoded::{Decoded, Extraction, Strategy};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, HEADER_SLOTS, LENGTH_FIELD_BYTES};
use crate::stego::slots::{self, capacity_slots};

/// Embed `message` behind a big-endian length header.
///
/// The grid is left untouched if the message does not fit.
///
/// # Errors
/// - [`StegoError::ImageTooSmall`] if the image has fewer than 12 slots.
/// - [`StegoError::MessageTooLong`] if `message` exceeds
///   [`prefixed_capacity`].
pub fn embed<G: PixelGrid + ?Sized>(grid: &mut G, message: &[u8]) -> Result<(), StegoError> {
    let (width, height) = (grid.width(), grid.height());
    if capacity_slots(width, height) < HEADER_SLOTS {
        return Err(StegoError::ImageTooSmall);
    }

    let capacity = prefixed_capacity(width, height);
    if message.len() > capacity {
        return Err(StegoError::MessageTooLong {
            len: message.len(),
            capacity,
        });
    }
    let len = u32::try_from(message.len()).map_err(|_| StegoError::MessageTooLong {
        len: message.len(),
        capacity: u32::MAX as usize,
    })?;

    slots::write_run(grid, 0, &frame::build_header(len))?;
    slots::write_run(grid, HEADER_SLOTS, message)?;

    tracing::debug!(len, capacity, "embedded length-prefixed message");
    Ok(())
}

/// Recover a length-prefixed message.
///
/// Returns [`Extraction::NoMessage`] when the stored length is negative,
/// larger than `width * height`, or would run past the end of the image.
pub fn extract<G: PixelGrid + ?Sized>(grid: &G) -> Extraction {
    let (width, height) = (grid.width(), grid.height());

    let mut header = [0u8; LENGTH_FIELD_BYTES];
    for (i, b) in header.iter_mut().enumerate() {
        match slots::read_slot(grid, i) {
            Ok(v) => *b = v,
            Err(_) => {
                tracing::debug!(width, height, "image too small for a length header");
                return Extraction::NoMessage;
            }
        }
    }

    let stored = frame::parse_header(header);
    let len = match usize::try_from(stored) {
        Ok(len) if len <= width.saturating_mul(height) => len,
        _ => {
            tracing::debug!(stored, width, height, "implausible length header");
            return Extraction::NoMessage;
        }
    };

    match slots::read_run(grid, HEADER_SLOTS, len) {
        Ok(bytes) => {
            let decoded = Decoded::new(bytes, Strategy::LengthPrefixed);
            tracing::debug!(len, score = decoded.score, "extracted length-prefixed message");
            Extraction::Found(decoded)
        }
        Err(e) => {
            tracing::debug!(len, error = %e, "length header runs past the image");
            Extraction::NoMessage
        }
    }
}
