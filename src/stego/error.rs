// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the embedding pipeline.
//!
//! Extraction does not appear here: reading a grid that holds no message is
//! a normal outcome ([`Extraction::NoMessage`](crate::stego::Extraction)),
//! never an error.

use core::fmt;

use crate::raster::RasterError;

/// Errors that can occur while embedding a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The message exceeds the capacity of the active framing.
    MessageTooLong { len: usize, capacity: usize },
    /// The image cannot even hold the frame header.
    ImageTooSmall,
    /// A slot index past the last RGB channel of the image. Indicates a
    /// missing capacity check upstream.
    OutOfRange { slot: usize, capacity: usize },
    /// A character outside U+0000..=U+00FF was passed to a strict conversion.
    UnsupportedCharacter { index: usize, ch: char },
    /// A zero byte inside a sentinel-terminated message.
    InteriorNul { index: usize },
    /// The image container could not be read or written.
    InvalidImage(RasterError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLong { len, capacity } => write!(
                f,
                "message is too long for this image ({len} characters, maximum length: {capacity})"
            ),
            Self::ImageTooSmall => write!(f, "image too small to hold a message header"),
            Self::OutOfRange { slot, capacity } => {
                write!(f, "channel slot {slot} out of range (image has {capacity} slots)")
            }
            Self::UnsupportedCharacter { index, ch } => write!(
                f,
                "character {ch:?} (U+{:04X}) at position {index} does not fit in one byte",
                *ch as u32
            ),
            Self::InteriorNul { index } => {
                write!(f, "message contains a zero byte at position {index}")
            }
            Self::InvalidImage(e) => write!(f, "invalid image: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidImage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for StegoError {
    fn from(e: RasterError) -> Self {
        Self::InvalidImage(e)
    }
}
