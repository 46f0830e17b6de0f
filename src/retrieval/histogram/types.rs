use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::raster::types::RasterImage;

/// Color distribution over the quantized RGB cube.
///
/// A histogram starts in the raw state, where every bin holds a pixel
/// count and the bins sum to `sample_count`. `normalize` moves it, once,
/// into the normalized state where the bins form a probability
/// distribution summing to 1. The state is tracked explicitly and
/// state-changing misuse fails instead of corrupting the bins, so the
/// fields stay private.
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    bin_bits: u32,
    bins: Vec<f64>,
    sample_count: u64,
    normalized: bool,
}

impl ColorHistogram {
    /// Number of bins a histogram with `bin_bits` bits per channel holds.
    pub fn bin_count(bin_bits: u32) -> usize {
        1usize << (3 * bin_bits)
    }

    pub(crate) fn from_parts(
        bin_bits: u32,
        bins: Vec<f64>,
        sample_count: u64,
        normalized: bool,
    ) -> Self {
        Self {
            bin_bits,
            bins,
            sample_count,
            normalized,
        }
    }

    /// Builds a raw histogram by scanning a quantized image.
    ///
    /// Each pixel's channels are packed into a single bin index as
    /// `(r << 2*bin_bits) | (g << bin_bits) | b`. The caller must have
    /// reduced the image to `bin_bits` bits per channel beforehand; a
    /// channel value that does not fit fails with `BinOutOfRange` rather
    /// than landing in a neighboring bin.
    pub fn from_image(image: &RasterImage, bin_bits: u32) -> Result<Self> {
        if bin_bits == 0 || bin_bits > u16::BITS {
            return Err(RetrievalError::InvalidBinDepth(bin_bits));
        }

        let mut bins = vec![0.0; Self::bin_count(bin_bits)];
        let limit = 1u32 << bin_bits;
        for pixel in &image.pixels {
            for &channel in pixel {
                if u32::from(channel) >= limit {
                    return Err(RetrievalError::BinOutOfRange {
                        value: channel,
                        bin_bits,
                    });
                }
            }
            let [r, g, b] = pixel.map(usize::from);
            let index = (r << (2 * bin_bits)) | (g << bin_bits) | b;
            bins[index] += 1.0;
        }

        Ok(Self {
            bin_bits,
            bins,
            sample_count: (image.width * image.height) as u64,
            normalized: false,
        })
    }

    /// One-way transition from raw counts to a probability distribution.
    ///
    /// Fails with `AlreadyNormalized` on a second call and with
    /// `EmptyHistogram` when there are no samples to divide by.
    pub fn normalize(&mut self) -> Result<()> {
        if self.normalized {
            return Err(RetrievalError::AlreadyNormalized);
        }
        if self.sample_count == 0 {
            return Err(RetrievalError::EmptyHistogram);
        }

        let total = self.sample_count as f64;
        for bin in &mut self.bins {
            *bin /= total;
        }
        self.normalized = true;
        Ok(())
    }

    /// Histogram-intersection similarity: the summed per-bin minimum.
    ///
    /// Symmetric. Bounded to [0, 1] with 1.0 meaning identical
    /// distributions when both operands are normalized; comparing raw
    /// histograms executes but yields a magnitude-dependent value, so
    /// callers normalize both sides first.
    pub fn intersect(&self, other: &ColorHistogram) -> Result<f64> {
        if self.bins.len() != other.bins.len() {
            return Err(RetrievalError::DimensionMismatch(
                self.bins.len(),
                other.bins.len(),
            ));
        }
        Ok(self
            .bins
            .iter()
            .zip(&other.bins)
            .map(|(a, b)| a.min(*b))
            .sum())
    }

    pub fn bin_bits(&self) -> u32 {
        self.bin_bits
    }

    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Number of pixels that contributed to this histogram.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
