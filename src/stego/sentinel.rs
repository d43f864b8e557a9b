// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Sentinel-terminated codec.
//!
//! Payload bytes go to consecutive channel slots from slot 0, followed by a
//! single zero byte. There is no header, so the reader scans until it meets
//! the terminator or a safety bound.
//!
//! The embedder walks the image with [`slots::locate_wrapping`]: column and
//! row are each reduced modulo the image size, so a message longer than the
//! image would overwrite its own first bytes. Readers of legacy images expect
//! exactly that layout. The capacity check keeps well clear of it in
//! practice.

use crate::raster::PixelGrid;
use crate::stego::capacity::sentinel_capacity;
use crate::stego::error::StegoError;
use crate::stego::score::is_printable;
use crate::stego::slots;

/// Byte written after the payload.
pub const TERMINATOR: u8 = 0;

/// Default cap on bytes collected by [`extract_direct`].
pub const MAX_SCAN_BYTES: usize = 500;

/// Default cap on slots visited by [`extract_printable_run`].
pub const MAX_RUN_SLOTS: usize = 300;

/// Embed `message` followed by a zero terminator.
///
/// # Errors
/// - [`StegoError::MessageTooLong`] if `message` exceeds [`sentinel_capacity`].
/// - [`StegoError::InteriorNul`] if `message` contains a zero byte, which
///   would end the message early on extraction.
///
/// Both checks run before the grid is touched.
pub fn embed<G: PixelGrid + ?Sized>(grid: &mut G, message: &[u8]) -> Result<(), StegoError> {
    let capacity = sentinel_capacity(grid.width(), grid.height());
    if message.len() > capacity {
        return Err(StegoError::MessageTooLong {
            len: message.len(),
            capacity,
        });
    }
    if let Some(index) = message.iter().position(|&b| b == TERMINATOR) {
        return Err(StegoError::InteriorNul { index });
    }

    // Only an empty grid can fail, and then it fails on slot 0 before any write.
    for (i, &b) in message.iter().enumerate() {
        slots::write_slot_wrapping(grid, i, b)?;
    }
    slots::write_slot_wrapping(grid, message.len(), TERMINATOR)?;

    tracing::debug!(len = message.len(), capacity, "embedded sentinel-terminated message");
    Ok(())
}

/// Scan from slot 0, collecting bytes until the terminator.
///
/// Stops at the first zero byte, after `max_bytes` bytes, or at the end of
/// the image, whichever comes first. The returned bytes are never zero.
pub fn extract_direct<G: PixelGrid + ?Sized>(grid: &G, max_bytes: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut slot = 0;
    while out.len() < max_bytes {
        match slots::read_slot(grid, slot) {
            Ok(TERMINATOR) => break,
            Ok(b) => out.push(b),
            Err(_) => {
                tracing::trace!(slot, "direct scan reached end of image");
                break;
            }
        }
        slot += 1;
    }
    out
}

/// Scan from slot 0, stopping at the first non-printable byte.
///
/// Visits at most `min(max_slots, width * height)` slots.
pub fn extract_printable_run<G: PixelGrid + ?Sized>(grid: &G, max_slots: usize) -> Vec<u8> {
    let limit = max_slots.min(grid.width().saturating_mul(grid.height()));
    let mut out = Vec::new();
    for slot in 0..limit {
        match slots::read_slot(grid, slot) {
            Ok(b) if is_printable(b) => out.push(b),
            _ => break,
        }
    }
    out
}

/// Drop every byte outside printable ASCII.
pub fn strip_unprintable(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().copied().filter(|&b| is_printable(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RgbaGrid;

    #[test]
    fn hi_in_ten_by_ten() {
        let mut grid = RgbaGrid::from_raw(10, 10, vec![0x41; 400]).unwrap();
        embed(&mut grid, b"HI").unwrap();
        assert_eq!(slots::read_slot(&grid, 0).unwrap(), b'H');
        assert_eq!(slots::read_slot(&grid, 1).unwrap(), b'I');
        assert_eq!(slots::read_slot(&grid, 2).unwrap(), 0);
        // Slot after the terminator keeps its cover value.
        assert_eq!(slots::read_slot(&grid, 3).unwrap(), 0x41);
        assert_eq!(extract_direct(&grid, MAX_SCAN_BYTES), b"HI");
    }

    #[test]
    fn capacity_boundary() {
        // 10x10: 300 slots, capacity 37.
        let mut grid = RgbaGrid::new(10, 10).unwrap();
        let msg = vec![b'x'; 37];
        embed(&mut grid, &msg).unwrap();
        assert_eq!(extract_direct(&grid, MAX_SCAN_BYTES), msg);

        let before = grid.clone();
        let too_long = vec![b'x'; 38];
        assert_eq!(
            embed(&mut grid, &too_long),
            Err(StegoError::MessageTooLong { len: 38, capacity: 37 })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn interior_nul_rejected_without_mutation() {
        let mut grid = RgbaGrid::new(10, 10).unwrap();
        let before = grid.clone();
        assert_eq!(embed(&mut grid, b"ab\0cd"), Err(StegoError::InteriorNul { index: 2 }));
        assert_eq!(grid, before);
    }

    #[test]
    fn empty_message_writes_only_terminator() {
        let mut grid = RgbaGrid::from_raw(1, 1, vec![9, 9, 9, 9]).unwrap();
        embed(&mut grid, b"").unwrap();
        assert_eq!(grid.as_raw(), &[0, 9, 9, 9]);
        assert!(extract_direct(&grid, MAX_SCAN_BYTES).is_empty());
    }

    #[test]
    fn direct_scan_bounded_by_max_bytes() {
        let grid = RgbaGrid::from_raw(100, 10, vec![b'z'; 4000]).unwrap();
        assert_eq!(extract_direct(&grid, MAX_SCAN_BYTES).len(), 500);
        assert_eq!(extract_direct(&grid, 7).len(), 7);
    }

    #[test]
    fn direct_scan_bounded_by_image() {
        // 2x1 image with no zero anywhere: 6 slots, scan stops at the edge.
        let grid = RgbaGrid::from_raw(2, 1, vec![b'k'; 8]).unwrap();
        assert_eq!(extract_direct(&grid, MAX_SCAN_BYTES), b"kkkkkk");
    }

    #[test]
    fn printable_run_stops_on_control_byte() {
        let mut grid = RgbaGrid::from_raw(10, 10, vec![b'q'; 400]).unwrap();
        slots::write_run(&mut grid, 0, b"Hey\x07there").unwrap();
        assert_eq!(extract_printable_run(&grid, MAX_RUN_SLOTS), b"Hey");
    }

    #[test]
    fn printable_run_capped_by_pixel_count() {
        // 4x2 image: 8 pixels caps the run even though 24 slots exist.
        let grid = RgbaGrid::from_raw(4, 2, vec![b'q'; 32]).unwrap();
        assert_eq!(extract_printable_run(&grid, MAX_RUN_SLOTS).len(), 8);
        let big = RgbaGrid::from_raw(100, 10, vec![b'q'; 4000]).unwrap();
        assert_eq!(extract_printable_run(&big, MAX_RUN_SLOTS).len(), 300);
    }

    #[test]
    fn strip_keeps_printable_only() {
        assert_eq!(strip_unprintable(&[b'a', 0x01, b'b', 0xFF, b' ']), b"ab ");
    }

    #[test]
    fn wrapping_embed_overwrites_start() {
        // Exercise the legacy wraparound directly: 1x1 image, 3 slots.
        let mut grid = RgbaGrid::new(1, 1).unwrap();
        for (i, &b) in b"abcd".iter().enumerate() {
            slots::write_slot_wrapping(&mut grid, i, b).unwrap();
        }
        // 'd' landed back on slot 0.
        assert_eq!(grid.rgba(0, 0), [b'd', b'b', b'c', 0xFF]);
    }

    /// A caller-owned grid that reports no columns.
    struct EmptyGrid;

    impl PixelGrid for EmptyGrid {
        fn width(&self) -> usize {
            0
        }
        fn height(&self) -> usize {
            4
        }
        fn channel(&self, _: usize, _: usize, _: crate::raster::Channel) -> u8 {
            unreachable!("empty grid has no pixels")
        }
        fn set_channel(&mut self, _: usize, _: usize, _: crate::raster::Channel, _: u8) {
            unreachable!("empty grid has no pixels")
        }
    }

    #[test]
    fn empty_grid_is_an_error_not_a_panic() {
        assert_eq!(
            embed(&mut EmptyGrid, b""),
            Err(StegoError::OutOfRange { slot: 0, capacity: 0 })
        );
        assert_eq!(
            embed(&mut EmptyGrid, b"x"),
            Err(StegoError::MessageTooLong { len: 1, capacity: 0 })
        );
        assert!(extract_direct(&EmptyGrid, MAX_SCAN_BYTES).is_empty());
        assert!(extract_printable_run(&EmptyGrid, MAX_RUN_SLOTS).is_empty());
    }
}
