// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for pixel grid construction and PNG conversion.

use std::fmt;

/// Errors that can occur while building a pixel grid or converting it
/// to and from an image container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero, or `width * height * 4` overflows.
    InvalidDimensions,
    /// A raw pixel buffer does not match `width * height * 4` bytes.
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The container holds a pixel layout this crate cannot map to ARGB.
    UnsupportedFormat(String),
    /// The image container could not be decoded.
    Decode(String),
    /// The image container could not be written.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions => write!(f, "invalid image dimensions"),
            Self::BufferSizeMismatch { expected, actual } => {
                write!(f, "pixel buffer has {actual} bytes, expected {expected}")
            }
            Self::UnsupportedFormat(msg) => write!(f, "unsupported pixel format: {msg}"),
            Self::Decode(msg) => write!(f, "image decode error: {msg}"),
            Self::Encode(msg) => write!(f, "image encode error: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

pub type Result<T> = std::result::Result<T, RasterError>;
