// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Capacity per framing convention.
//!
//! Both codecs store one payload byte per channel slot, so capacity is a pure
//! function of the image dimensions:
//!
//! - length-prefixed: every slot after the 12-slot header.
//! - sentinel: one eighth of the slots. Far below the physical limit, but
//!   images from the legacy tool were sized against this bound and the
//!   headroom keeps the terminator away from the end of the image.

use crate::stego::frame::HEADER_SLOTS;
use crate::stego::slots::capacity_slots;

/// Divisor applied to the slot count for sentinel-terminated messages.
pub const SENTINEL_CAPACITY_DIVISOR: usize = 8;

/// Maximum message length, in bytes, for the length-prefixed codec.
///
/// Returns 0 for images too small to hold the header.
pub fn prefixed_capacity(width: usize, height: usize) -> usize {
    capacity_slots(width, height).saturating_sub(HEADER_SLOTS)
}

/// Maximum message length, in bytes, for the sentinel-terminated codec.
pub fn sentinel_capacity(width: usize, height: usize) -> usize {
    capacity_slots(width, height) / SENTINEL_CAPACITY_DIVISOR
}
