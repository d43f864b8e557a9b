// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Message embedding and extraction.
//!
//! Two framing conventions are supported, and images exist in both:
//!
//! - **Length-prefixed** ([`prefixed`]): a 4-byte big-endian length in a
//!   reserved 12-slot header, then one payload byte per channel slot.
//! - **Sentinel-terminated** ([`sentinel`]): payload bytes from slot 0,
//!   followed by a zero byte. Decoding goes through the plausibility-scored
//!   [`select`] stage because nothing else marks where the payload ends.
//!
//! Neither framing can be detected from the pixels, so every entry point
//! takes an explicit [`Framing`].

pub mod error;
pub mod slots;
pub mod frame;
pub mod capacity;
pub mod message;
pub mod decoded;
pub mod prefixed;
pub mod sentinel;
pub mod score;
pub mod select;

pub use error::StegoError;
pub use decoded::{Decoded, Extraction, Strategy, NO_MESSAGE_TEXT};
pub use message::Message;
pub use score::Plausibility;
pub use select::{smart_extract, smart_extract_with, DecodeOptions};

use std::fmt;
use std::str::FromStr;

use crate::raster::PixelGrid;

/// How the message boundaries are stored in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Framing {
    /// Explicit length header.
    #[default]
    LengthPrefixed,
    /// Zero-byte terminator.
    Sentinel,
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthPrefixed => write!(f, "length-prefixed"),
            Self::Sentinel => write!(f, "sentinel"),
        }
    }
}

impl FromStr for Framing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length-prefixed" | "prefixed" | "length" => Ok(Self::LengthPrefixed),
            "sentinel" | "terminated" => Ok(Self::Sentinel),
            other => Err(format!("unknown framing: {other}")),
        }
    }
}

/// Maximum message length, in bytes, for a `width × height` image.
pub fn capacity(width: usize, height: usize, framing: Framing) -> usize {
    match framing {
        Framing::LengthPrefixed => capacity::prefixed_capacity(width, height),
        Framing::Sentinel => capacity::sentinel_capacity(width, height),
    }
}

/// Embed `message` into `grid` in place.
///
/// All-or-nothing: on error the grid is unchanged. Alpha channels are never
/// written.
pub fn embed<G: PixelGrid + ?Sized>(grid: &mut G, message: &Message, framing: Framing) -> Result<(), StegoError> {
    match framing {
        Framing::LengthPrefixed => prefixed::embed(grid, message.as_bytes()),
        Framing::Sentinel => sentinel::embed(grid, message.as_bytes()),
    }
}

/// Recover a message from `grid`.
///
/// Never fails: garbage grids yield [`Extraction::NoMessage`] or a
/// low-scoring [`Decoded`].
pub fn extract<G: PixelGrid + ?Sized>(grid: &G, framing: Framing) -> Extraction {
    match framing {
        Framing::LengthPrefixed => prefixed::extract(grid),
        Framing::Sentinel => smart_extract(grid),
    }
}

/// Embed `message` into a PNG image and return the re-encoded PNG.
///
/// The output is always 8-bit RGBA.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if `png_bytes` cannot be decoded.
/// - Any embedding error from [`embed`].
#[cfg(feature = "png")]
pub fn encode_png(png_bytes: &[u8], message: &Message, framing: Framing) -> Result<Vec<u8>, StegoError> {
    let mut grid = crate::raster::png::decode(png_bytes)?;
    embed(&mut grid, message, framing)?;
    Ok(crate::raster::png::encode(&grid)?)
}

/// Extract a message from PNG bytes.
#[cfg(feature = "png")]
pub fn decode_png(png_bytes: &[u8], framing: Framing) -> Result<Extraction, StegoError> {
    let grid = crate::raster::png::decode(png_bytes)?;
    Ok(extract(&grid, framing))
}

/// Capacity of a PNG image for the given framing.
#[cfg(feature = "png")]
pub fn png_capacity(png_bytes: &[u8], framing: Framing) -> Result<usize, StegoError> {
    let grid = crate::raster::png::decode(png_bytes)?;
    Ok(capacity(grid.width(), grid.height(), framing))
}
