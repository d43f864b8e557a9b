// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Decoder selection for sentinel-framed images.
//!
//! A sentinel image carries nothing that says where the payload ends except
//! the zero byte, and noise rarely contains one early. The selector therefore
//! builds up to three interpretations and keeps the most plausible:
//!
//! 1. **Direct**: scan to the first zero byte. Returned immediately if it is
//!    readable, which is the common case.
//! 2. **Stripped**: the direct scan with non-printable bytes removed.
//! 3. **PrintableRun**: scan that stops at the first non-printable byte.
//!
//! Ties keep the earlier candidate. The length-prefixed codec is never tried
//! here: its header cannot be told apart from sentinel payload, so callers
//! pick the framing explicitly.

use crate::raster::PixelGrid;
use crate::stego::decoded::{Decoded, Extraction, Strategy};
use crate::stego::score::Plausibility;
use crate::stego::sentinel::{self, MAX_RUN_SLOTS, MAX_SCAN_BYTES};

/// Scan limits and scoring thresholds for [`smart_extract_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Byte cap for the direct scan.
    pub max_scan_bytes: usize,
    /// Slot cap for the printable-run scan (further capped by pixel count).
    pub max_run_slots: usize,
    pub plausibility: Plausibility,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_scan_bytes: MAX_SCAN_BYTES,
            max_run_slots: MAX_RUN_SLOTS,
            plausibility: Plausibility::default(),
        }
    }
}

/// Extract a sentinel-framed message with default options.
pub fn smart_extract<G: PixelGrid + ?Sized>(grid: &G) -> Extraction {
    smart_extract_with(grid, &DecodeOptions::default())
}

/// Extract a sentinel-framed message, choosing the most plausible reading.
///
/// Returns [`Extraction::NoMessage`] only when the winning candidate is
/// empty; otherwise the caller gets the best guess and its score.
pub fn smart_extract_with<G: PixelGrid + ?Sized>(grid: &G, opts: &DecodeOptions) -> Extraction {
    let p = &opts.plausibility;
    let direct = sentinel::extract_direct(grid, opts.max_scan_bytes);

    if p.is_readable(&direct) {
        tracing::debug!(len = direct.len(), "direct sentinel scan is readable");
        return found(direct, Strategy::Direct, p);
    }

    let stripped = sentinel::strip_unprintable(&direct);
    let run = sentinel::extract_printable_run(grid, opts.max_run_slots);

    let mut best: Option<(Vec<u8>, Strategy, i64)> = None;
    for (bytes, strategy) in [
        (direct, Strategy::Direct),
        (stripped, Strategy::Stripped),
        (run, Strategy::PrintableRun),
    ] {
        let score = p.score(&bytes);
        tracing::trace!(?strategy, len = bytes.len(), score, "sentinel candidate");
        if best.as_ref().map_or(true, |(_, _, best_score)| score > *best_score) {
            best = Some((bytes, strategy, score));
        }
    }

    match best {
        Some((bytes, strategy, score)) if !bytes.is_empty() => {
            tracing::debug!(?strategy, len = bytes.len(), score, "selected sentinel candidate");
            Extraction::Found(Decoded { bytes, score, strategy })
        }
        _ => {
            tracing::debug!("no sentinel candidate found");
            Extraction::NoMessage
        }
    }
}

fn found(bytes: Vec<u8>, strategy: Strategy, p: &Plausibility) -> Extraction {
    let score = p.score(&bytes);
    Extraction::Found(Decoded { bytes, score, strategy })
}
