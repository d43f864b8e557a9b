// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! PNG container adapter.
//!
//! Decodes a PNG byte stream into an [`RgbaGrid`] and writes a grid back out
//! as an 8-bit RGBA PNG. Only lossless output is produced: the payload lives
//! in full channel values and would not survive lossy re-encoding.
//!
//! Accepted inputs (after palette / low-bit-depth expansion and 16-bit
//! stripping): grayscale, grayscale + alpha, RGB and RGBA. Images without an
//! alpha channel come back fully opaque.

use png::{BitDepth, ColorType, Transformations};

use super::error::{RasterError, Result};
use super::grid::RgbaGrid;
use super::PixelGrid;

/// Decode PNG bytes into an owned RGBA grid.
pub fn decode(png_bytes: &[u8]) -> Result<RgbaGrid> {
    let mut decoder = png::Decoder::new(png_bytes);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RasterError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RasterError::Decode(e.to_string()))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(RasterError::UnsupportedFormat(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(RasterError::UnsupportedFormat(format!("color type {other:?}")));
        }
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let mut grid = RgbaGrid::new(width, height)?;

    for y in 0..height {
        let row = &buf[y * info.line_size..y * info.line_size + width * samples];
        for (x, px) in row.chunks_exact(samples).enumerate() {
            let rgba = match samples {
                1 => [px[0], px[0], px[0], 0xFF],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 0xFF],
                _ => [px[0], px[1], px[2], px[3]],
            };
            grid.set_rgba(x, y, rgba);
        }
    }

    tracing::debug!(width, height, color = ?info.color_type, "decoded PNG");
    Ok(grid)
}

/// Encode a grid as an 8-bit RGBA PNG.
pub fn encode(grid: &RgbaGrid) -> Result<Vec<u8>> {
    let width = u32::try_from(grid.width()).map_err(|_| RasterError::InvalidDimensions)?;
    let height = u32::try_from(grid.height()).map_err(|_| RasterError::InvalidDimensions)?;

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        writer
            .write_image_data(grid.as_raw())
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RasterError::Encode(e.to_string()))?;
    }

    tracing::debug!(width, height, bytes = out.len(), "encoded PNG");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Channel;

    fn encode_raw(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn rgba_roundtrip_is_lossless() {
        let data: Vec<u8> = (0..5 * 3 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let grid = RgbaGrid::from_raw(5, 3, data).unwrap();
        let bytes = encode(&grid).unwrap();
        let back = decode(&bytes).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn rgb_input_becomes_opaque() {
        let bytes = encode_raw(2, 1, ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let grid = decode(&bytes).unwrap();
        assert_eq!(grid.rgba(0, 0), [1, 2, 3, 0xFF]);
        assert_eq!(grid.rgba(1, 0), [4, 5, 6, 0xFF]);
    }

    #[test]
    fn grayscale_alpha_is_replicated() {
        let bytes = encode_raw(1, 2, ColorType::GrayscaleAlpha, &[40, 7, 90, 200]);
        let grid = decode(&bytes).unwrap();
        assert_eq!(grid.rgba(0, 0), [40, 40, 40, 7]);
        assert_eq!(grid.channel(0, 1, Channel::Alpha), 200);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        match decode(b"definitely not a png") {
            Err(RasterError::Decode(_)) => {}
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
