// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Plausibility scoring for decoded candidates.
//!
//! Sentinel-framed images carry no length, so reading one that was never
//! embedded (or was embedded with the other framing) yields channel noise.
//! These heuristics rank candidates by how much they look like text:
//!
//! - **readable**: nonempty and more than 80% printable ASCII (`0x20..=0x7E`).
//! - **score**: +1 per printable byte, -1 per other byte, and an extra
//!   `len - 200` penalty once a candidate exceeds 200 bytes. Genuine
//!   messages are short; long runs are usually noise that happened to miss a
//!   zero byte.

/// Printable-ASCII test used by every heuristic in this module.
pub fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

/// Tunable thresholds for the heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Plausibility {
    /// Printable fraction that must be exceeded for [`Self::is_readable`].
    pub readable_ratio: f64,
    /// Lengths above this are penalized by the excess.
    pub long_text_threshold: usize,
}

impl Default for Plausibility {
    fn default() -> Self {
        Self {
            readable_ratio: 0.8,
            long_text_threshold: 200,
        }
    }
}

impl Plausibility {
    pub fn is_readable(&self, text: &[u8]) -> bool {
        if text.is_empty() {
            return false;
        }
        let printable = text.iter().filter(|&&b| is_printable(b)).count();
        printable as f64 / text.len() as f64 > self.readable_ratio
    }

    pub fn score(&self, text: &[u8]) -> i64 {
        let printable = text.iter().filter(|&&b| is_printable(b)).count() as i64;
        let len = text.len() as i64;
        let mut score = printable - (len - printable);
        if text.len() > self.long_text_threshold {
            score -= (text.len() - self.long_text_threshold) as i64;
        }
        score
    }

    /// Score an optional candidate; an absent one scores -1.
    pub fn score_candidate(&self, text: Option<&[u8]>) -> i64 {
        text.map_or(-1, |t| self.score(t))
    }
}

/// [`Plausibility::is_readable`] with default thresholds.
pub fn is_readable(text: &[u8]) -> bool {
    Plausibility::default().is_readable(text)
}

/// [`Plausibility::score`] with default thresholds.
pub fn score(text: &[u8]) -> i64 {
    Plausibility::default().score(text)
}

/// [`Plausibility::score_candidate`] with default thresholds.
pub fn score_candidate(text: Option<&[u8]>) -> i64 {
    Plausibility::default().score_candidate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_range() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x1F));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0));
        assert!(!is_printable(0xE9));
    }

    #[test]
    fn readable_threshold_is_strict() {
        assert!(!is_readable(b""));
        assert!(is_readable(b"hello"));
        // 4 of 5 printable = 0.8 exactly: not readable.
        assert!(!is_readable(&[b'a', b'b', b'c', b'd', 0x01]));
        // 9 of 10 printable = 0.9.
        assert!(is_readable(&[b'a', b'a', b'a', b'a', b'a', b'a', b'a', b'a', b'a', 0x01]));
    }

    #[test]
    fn score_counts_printable_minus_other() {
        assert_eq!(score(b""), 0);
        assert_eq!(score(b"HI"), 2);
        assert_eq!(score(&[b'H', 0x00, 0xFF]), -1);
    }

    #[test]
    fn long_candidates_penalized() {
        let text = vec![b'a'; 200];
        assert_eq!(score(&text), 200);
        let text = vec![b'a'; 250];
        // 250 printable, minus 50 excess.
        assert_eq!(score(&text), 200);
        let text = vec![0x01; 250];
        assert_eq!(score(&text), -300);
    }

    #[test]
    fn absent_candidate_scores_minus_one() {
        assert_eq!(score_candidate(None), -1);
        assert_eq!(score_candidate(Some(b"x")), 1);
    }

    #[test]
    fn score_strictly_decreases_under_substitution() {
        for len in [1usize, 10, 199, 200, 201, 400] {
            let mut text = vec![b'm'; len];
            let mut prev = score(&text);
            for i in 0..len {
                text[i] = 0x07;
                let s = score(&text);
                assert!(s < prev, "len {len}, after {} substitutions: {s} !< {prev}", i + 1);
                prev = s;
            }
        }
    }

    #[test]
    fn custom_thresholds() {
        let p = Plausibility {
            readable_ratio: 0.5,
            long_text_threshold: 2,
        };
        assert!(p.is_readable(&[b'a', b'b', 0x01]));
        assert_eq!(p.score(b"abcd"), 2);
    }
}
