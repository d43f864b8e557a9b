// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Length-prefixed frame header.
//!
//! The header reserves the first four pixels (12 channel slots) of the image.
//! The message length is stored as a big-endian `u32` in the first four of
//! those slots, one byte per slot:
//!
//! ```text
//! slot  0  1  2  3  4 .. 11      12 .. 12+L-1
//!       R  G  B  R  (reserved)   payload bytes
//!       |  len BE  |
//!       pixel 0 | pixel 1 ...    pixel 4 ..
//! ```
//!
//! Slots 4–11 are never written by the embedder and never read by the
//! extractor. Payload bytes always start at the fifth pixel.

use crate::stego::slots::CHANNELS_PER_PIXEL;

/// Pixels reserved for the header.
pub const HEADER_PIXELS: usize = 4;

/// Channel slots reserved for the header. Payload starts at this slot.
pub const HEADER_SLOTS: usize = HEADER_PIXELS * CHANNELS_PER_PIXEL; // 12

/// Bytes of the big-endian length field.
pub const LENGTH_FIELD_BYTES: usize = 4;

/// Encode a message length as the four header bytes.
pub fn build_header(len: u32) -> [u8; LENGTH_FIELD_BYTES] {
    len.to_be_bytes()
}

/// Decode the four header bytes into the stored length.
///
/// The value is signed: the legacy reader treats a set top bit as a negative
/// length, i.e. "no message".
pub fn parse_header(bytes: [u8; LENGTH_FIELD_BYTES]) -> i32 {
    i32::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout_constants() {
        assert_eq!(HEADER_SLOTS, 12);
        assert!(LENGTH_FIELD_BYTES <= HEADER_SLOTS);
    }

    #[test]
    fn header_is_big_endian() {
        assert_eq!(build_header(5), [0, 0, 0, 5]);
        assert_eq!(build_header(0x0102_0304), [1, 2, 3, 4]);
        assert_eq!(parse_header([0, 0, 1, 0]), 256);
    }

    #[test]
    fn top_bit_reads_negative() {
        assert!(parse_header([0x80, 0, 0, 0]) < 0);
        assert_eq!(parse_header([0xFF, 0xFF, 0xFF, 0xFF]), -1);
    }
}
