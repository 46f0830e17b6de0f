//! Raster image data types

use crate::retrieval::common::error::{Result, RetrievalError};

/// Represents a decoded raster image
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Bits per channel as originally decoded (e.g., 8 for a 255-valued file)
    pub decoded_bits: u32,
    /// Bits per channel the samples currently occupy; lowered by every
    /// depth reduction, so later passes never shift from stale state
    pub effective_bits: u32,
    /// Row-major RGB triples, `width * height` entries
    pub pixels: Vec<[u16; 3]>,
}

impl RasterImage {
    /// Assembles an image from already-decoded parts.
    ///
    /// Checks the structural invariants so readers and tests cannot hand
    /// out an image whose pixel buffer disagrees with its dimensions or
    /// whose samples overflow the stated depth.
    pub fn from_pixels(
        width: usize,
        height: usize,
        bits: u32,
        pixels: Vec<[u16; 3]>,
    ) -> Result<Self> {
        if bits == 0 || bits > u16::BITS {
            return Err(RetrievalError::FormatError(format!(
                "unsupported bit depth {bits}"
            )));
        }
        if pixels.len() != width * height {
            return Err(RetrievalError::FormatError(format!(
                "{} pixels for a {}x{} image",
                pixels.len(),
                width,
                height
            )));
        }
        let limit = 1u32 << bits;
        for pixel in &pixels {
            for &channel in pixel {
                if u32::from(channel) >= limit {
                    return Err(RetrievalError::FormatError(format!(
                        "sample {channel} does not fit in {bits} bits"
                    )));
                }
            }
        }

        Ok(Self {
            width,
            height,
            decoded_bits: bits,
            effective_bits: bits,
            pixels,
        })
    }

    /// Returns the RGB triple at `(x, y)`, with `(0, 0)` the top-left pixel.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[u16; 3]> {
        if x >= self.width || y >= self.height {
            return Err(RetrievalError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixels[y * self.width + x])
    }
}
