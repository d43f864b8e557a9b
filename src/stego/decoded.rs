// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Extraction results.

use crate::stego::message::latin1_to_string;
use crate::stego::score;

/// Text shown to users when a grid holds no recognizable message.
pub const NO_MESSAGE_TEXT: &str =
    "No hidden message found or the image was not encrypted with this tool.";

/// Which decoding interpretation produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Length header followed by exactly that many bytes.
    LengthPrefixed,
    /// Sentinel scan from slot 0 up to the first zero byte.
    Direct,
    /// The direct scan with every non-printable byte removed.
    Stripped,
    /// Scan from slot 0 that stops at the first non-printable byte.
    PrintableRun,
}

/// One decoded candidate and its plausibility score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    pub score: i64,
    pub strategy: Strategy,
}

impl Decoded {
    /// Wrap `bytes`, scoring them with the default [`score::Plausibility`].
    pub fn new(bytes: Vec<u8>, strategy: Strategy) -> Self {
        let score = score::score(&bytes);
        Self { bytes, score, strategy }
    }

    /// The payload as Latin-1 text.
    pub fn text(&self) -> String {
        latin1_to_string(&self.bytes)
    }

    pub fn is_readable(&self) -> bool {
        score::is_readable(&self.bytes)
    }
}

/// Outcome of an extraction. Finding nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(Decoded),
    NoMessage,
}

impl Extraction {
    pub fn decoded(&self) -> Option<&Decoded> {
        match self {
            Self::Found(d) => Some(d),
            Self::NoMessage => None,
        }
    }

    pub fn into_decoded(self) -> Option<Decoded> {
        match self {
            Self::Found(d) => Some(d),
            Self::NoMessage => None,
        }
    }

    /// The recovered text, if any.
    pub fn text(&self) -> Option<String> {
        self.decoded().map(Decoded::text)
    }

    /// The score the decoder assigned to the result; `NoMessage` scores -1.
    pub fn score(&self) -> i64 {
        self.decoded().map_or(-1, |d| d.score)
    }

    /// What a front end should display: the recovered text, or
    /// [`NO_MESSAGE_TEXT`].
    pub fn display_text(&self) -> String {
        self.text().unwrap_or_else(|| NO_MESSAGE_TEXT.to_string())
    }
}
