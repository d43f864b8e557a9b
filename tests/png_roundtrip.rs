// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! PNG-level round-trip tests (the `png` feature).

#![cfg(feature = "png")]

use pixmsg_core::raster::png;
use pixmsg_core::{decode_png, encode_png, png_capacity, Extraction, Framing, Message, RgbaGrid, StegoError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn cover_png(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let data = (0..width * height * 4).map(|_| rng.gen::<u8>()).collect();
    let grid = RgbaGrid::from_raw(width, height, data).unwrap();
    png::encode(&grid).unwrap()
}

#[test]
fn png_roundtrip_both_framings() {
    let cover = cover_png(32, 24, 1);
    let msg = Message::from_text("The quick brown fox jumps over the lazy dog").unwrap();
    for framing in [Framing::LengthPrefixed, Framing::Sentinel] {
        let stego = encode_png(&cover, &msg, framing).unwrap();
        let found = decode_png(&stego, framing).unwrap();
        assert_eq!(found.text(), Some(msg.to_text()), "{framing}");
    }
}

#[test]
fn stego_png_keeps_dimensions_and_alpha() {
    let cover = cover_png(16, 16, 2);
    let stego = encode_png(&cover, &Message::from_text("alpha check").unwrap(), Framing::LengthPrefixed).unwrap();

    let before = png::decode(&cover).unwrap();
    let after = png::decode(&stego).unwrap();
    assert_eq!(before.as_raw().len(), after.as_raw().len());
    for (a, b) in before.as_raw().chunks_exact(4).zip(after.as_raw().chunks_exact(4)) {
        assert_eq!(a[3], b[3]);
    }
}

#[test]
fn capacity_from_png() {
    let cover = cover_png(10, 10, 3);
    assert_eq!(png_capacity(&cover, Framing::LengthPrefixed).unwrap(), 288);
    assert_eq!(png_capacity(&cover, Framing::Sentinel).unwrap(), 37);
}

#[test]
fn too_long_message_reports_capacity() {
    let cover = cover_png(10, 10, 4);
    let msg = Message::from(vec![b'x'; 38]);
    match encode_png(&cover, &msg, Framing::Sentinel) {
        Err(e @ StegoError::MessageTooLong { .. }) => {
            assert!(e.to_string().contains("maximum length: 37"), "{e}");
        }
        other => panic!("expected MessageTooLong, got {other:?}"),
    }
}

#[test]
fn invalid_png_is_an_error_not_a_panic() {
    assert!(matches!(
        decode_png(b"\x89PNG broken", Framing::Sentinel),
        Err(StegoError::InvalidImage(_))
    ));
}

#[test]
fn unembedded_png_reads_as_no_message_or_low_score() {
    let cover = cover_png(40, 40, 5);
    let found = decode_png(&cover, Framing::LengthPrefixed).unwrap();
    assert!(matches!(found, Extraction::NoMessage) || found.score() < 40);
}
