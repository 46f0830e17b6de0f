//! Reader for plain-text raster images.
//!
//! The format is a four-line header followed by the samples: a format tag
//! line, a comment line, a `width height` line, and a maximum-channel-value
//! line. The remaining lines hold whitespace-separated integer triples
//! (R G B ...) flattened across lines in row-major order, `width * height * 3`
//! values in total.

use tracing::debug;

use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::raster::reader::RasterReader;
use crate::retrieval::raster::types::RasterImage;

/// Decoder for the plain-text pixmap format.
///
/// The maximum-value header field is converted to bits per channel here,
/// at the parse boundary; everything downstream deals exclusively in bits.
pub struct PlainTextReader;

impl RasterReader for PlainTextReader {
    /// Reads and decodes a plain-text raster image from a byte array.
    ///
    /// This method:
    /// 1. Skips the format tag and comment lines (presence is still required)
    /// 2. Parses the dimensions and the maximum channel value
    /// 3. Derives bits per channel from the maximum value
    /// 4. Collects the flattened sample stream into row-major RGB triples
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the image file
    ///
    /// # Returns
    ///
    /// * `Ok(RasterImage)` - Successfully decoded image
    /// * `Err(RetrievalError)` - Malformed or truncated input
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding plain-text image, {} bytes", data.len());

        let text = std::str::from_utf8(data)
            .map_err(|e| RetrievalError::FormatError(format!("not valid UTF-8: {e}")))?;
        let mut lines = text.lines();

        let tag = lines
            .next()
            .ok_or_else(|| RetrievalError::FormatError("missing format tag line".to_string()))?;
        if tag.trim().is_empty() {
            return Err(RetrievalError::FormatError(
                "empty format tag line".to_string(),
            ));
        }

        // Comment line: content is ignored but the line must exist
        lines
            .next()
            .ok_or_else(|| RetrievalError::FormatError("missing comment line".to_string()))?;

        let dimensions = lines
            .next()
            .ok_or_else(|| RetrievalError::FormatError("missing dimensions line".to_string()))?;
        let mut fields = dimensions.split_whitespace();
        let width = parse_dimension(fields.next(), "width")?;
        let height = parse_dimension(fields.next(), "height")?;

        let max_line = lines
            .next()
            .ok_or_else(|| RetrievalError::FormatError("missing maximum value line".to_string()))?;
        let max_value: u32 = max_line.trim().parse().map_err(|_| {
            RetrievalError::FormatError(format!("invalid maximum value '{}'", max_line.trim()))
        })?;
        if max_value == 0 {
            return Err(RetrievalError::FormatError(
                "maximum value must be positive".to_string(),
            ));
        }

        // Bits needed to represent the maximum channel value,
        // e.g. max_value = 255 (0xFF) -> 8 bits
        //      max_value = 4095 (0xFFF) -> 12 bits
        let bits = u32::BITS - max_value.leading_zeros();
        if bits > u16::BITS {
            return Err(RetrievalError::FormatError(format!(
                "maximum value {max_value} needs {bits} bits per channel"
            )));
        }

        // All remaining tokens form one flattened triple stream; there is
        // no one-row-per-line requirement.
        let expected = width * height * 3;
        let mut samples: Vec<u16> = Vec::with_capacity(expected);
        for token in lines.flat_map(str::split_whitespace) {
            if samples.len() == expected {
                return Err(RetrievalError::FormatError(
                    "trailing data after pixel samples".to_string(),
                ));
            }
            let value: u32 = token
                .parse()
                .map_err(|_| RetrievalError::FormatError(format!("invalid sample '{token}'")))?;
            if value > max_value {
                return Err(RetrievalError::FormatError(format!(
                    "sample {value} exceeds maximum value {max_value}"
                )));
            }
            samples.push(value as u16);
        }
        if samples.len() < expected {
            return Err(RetrievalError::FormatError(format!(
                "expected {} samples for a {}x{} image, found {}",
                expected,
                width,
                height,
                samples.len()
            )));
        }

        let pixels = samples
            .chunks_exact(3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
            .collect();

        debug!(
            "Decoded image: {}x{}, {} bits per channel (max value {})",
            width, height, bits, max_value
        );

        RasterImage::from_pixels(width, height, bits, pixels)
    }
}

fn parse_dimension(token: Option<&str>, label: &str) -> Result<usize> {
    let token =
        token.ok_or_else(|| RetrievalError::FormatError(format!("missing {label} field")))?;
    token
        .parse()
        .map_err(|_| RetrievalError::FormatError(format!("invalid {label} '{token}'")))
}
