// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # pixmsg-core
//!
//! Hides short text messages in the red, green and blue channels of a raster
//! image and reads them back. Each message byte replaces one full channel
//! value; alpha is never touched. Two framing conventions are supported:
//!
//! - **Length-prefixed**: a 4-byte big-endian length header, then the payload.
//!   Decoding is exact.
//! - **Sentinel-terminated**: payload followed by a zero byte. Decoding scans
//!   for the terminator and, when the result looks like noise, scores
//!   alternative readings and returns the most plausible one.
//!
//! The codec works on any [`PixelGrid`]. With the default `png` feature the
//! crate can also read and write PNG files directly. There is no
//! encryption: anyone who knows the scheme can read the message.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pixmsg_core::{encode_png, decode_png, Framing, Message};
//!
//! let cover = std::fs::read("photo.png").unwrap();
//! let msg = Message::from_text("meet at noon").unwrap();
//! let stego = encode_png(&cover, &msg, Framing::LengthPrefixed).unwrap();
//! let found = decode_png(&stego, Framing::LengthPrefixed).unwrap();
//! assert_eq!(found.text().as_deref(), Some("meet at noon"));
//! ```

pub mod raster;
pub mod stego;

pub use raster::{Channel, PixelGrid, RasterError, RgbaGrid};
pub use stego::{capacity, embed, extract, smart_extract, smart_extract_with, Framing, StegoError};
pub use stego::{Decoded, DecodeOptions, Extraction, Message, Plausibility, Strategy, NO_MESSAGE_TEXT};
#[cfg(feature = "png")]
pub use stego::{decode_png, encode_png, png_capacity};
