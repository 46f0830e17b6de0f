//! In-place color depth reduction.

use tracing::debug;

use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::raster::types::RasterImage;

/// Reduces every channel of `image` to `target_bits` by right-shifting
/// away the low-order precision, merging nearby colors into one value.
///
/// The shift amount is computed from the image's current effective depth,
/// and the effective depth is updated on success, so a subsequent
/// reduction shifts relative to the depth the samples actually occupy.
/// Reducing to the current depth is a no-op; a target of zero or wider
/// than the current depth fails with `InvalidDepth`.
pub fn reduce_depth(image: &mut RasterImage, target_bits: u32) -> Result<()> {
    if target_bits == 0 || target_bits > image.effective_bits {
        return Err(RetrievalError::InvalidDepth {
            current: image.effective_bits,
            target: target_bits,
        });
    }

    let shift = image.effective_bits - target_bits;
    if shift == 0 {
        return Ok(());
    }

    for pixel in &mut image.pixels {
        for channel in pixel.iter_mut() {
            *channel >>= shift;
        }
    }
    image.effective_bits = target_bits;

    debug!("Reduced channels to {} bits (shift {})", target_bits, shift);
    Ok(())
}
