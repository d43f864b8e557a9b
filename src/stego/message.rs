// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Single-byte message payloads.
//!
//! Every payload character occupies exactly one channel slot, so the codec
//! works on raw bytes. Conversion from Rust text happens once, here:
//! [`Message::from_text`] rejects anything above U+00FF, while
//! [`Message::from_text_lossy`] keeps only the low 8 bits of each code point
//! (the behaviour of images produced by the legacy tool). Bytes decode back
//! to text as Latin-1, so `from_text` followed by `to_text` is the identity.

use crate::stego::error::StegoError;

/// A payload of single-byte characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message(Vec<u8>);

impl Message {
    /// Convert text, rejecting characters that do not fit in one byte.
    pub fn from_text(text: &str) -> Result<Self, StegoError> {
        text.chars()
            .enumerate()
            .map(|(index, ch)| u8::try_from(ch).map_err(|_| StegoError::UnsupportedCharacter { index, ch }))
            .collect::<Result<Vec<u8>, _>>()
            .map(Self)
    }

    /// Convert text, truncating each code point to its low 8 bits.
    pub fn from_text_lossy(text: &str) -> Self {
        Self(text.chars().map(|ch| (ch as u32 & 0xFF) as u8).collect())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode as Latin-1: byte `b` becomes `char::from(b)`.
    pub fn to_text(&self) -> String {
        latin1_to_string(&self.0)
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
