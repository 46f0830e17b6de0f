//! Dataset histogram sources.
//!
//! A dataset entry's histogram either already exists on disk in the text
//! format, or has to be computed from a raw image with the same decode
//! and depth-reduction steps the query goes through. The `HistogramSource`
//! trait hides that difference from the pipeline, which never depends on
//! a concrete file-system layout.

use std::io::BufReader;
use std::path::PathBuf;

use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::histogram::ColorHistogram;
use crate::retrieval::raster::quantize::reduce_depth;
use crate::retrieval::raster::{PlainTextReader, RasterReader};

pub trait HistogramSource {
    /// Produces the entry's raw histogram at the requested bin depth.
    fn load(&self, bin_bits: u32) -> Result<ColorHistogram>;
}

/// Precomputed histogram persisted in the two-line text format.
pub struct HistogramFileSource {
    path: PathBuf,
}

impl HistogramFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistogramSource for HistogramFileSource {
    fn load(&self, bin_bits: u32) -> Result<ColorHistogram> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            RetrievalError::InputReadError(format!("{}: {}", self.path.display(), e))
        })?;
        let mut reader = BufReader::new(file);
        ColorHistogram::read_from(&mut reader, bin_bits)
    }
}

/// Raw image histogrammed on demand, processed exactly like the query.
pub struct RasterFileSource<R: RasterReader> {
    path: PathBuf,
    reader: R,
}

impl RasterFileSource<PlainTextReader> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reader: PlainTextReader,
        }
    }
}

impl<R: RasterReader> RasterFileSource<R> {
    pub fn with_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
        }
    }
}

impl<R: RasterReader> HistogramSource for RasterFileSource<R> {
    fn load(&self, bin_bits: u32) -> Result<ColorHistogram> {
        let data = std::fs::read(&self.path).map_err(|e| {
            RetrievalError::InputReadError(format!("{}: {}", self.path.display(), e))
        })?;
        let mut image = self.reader.read_raster(&data)?;
        reduce_depth(&mut image, bin_bits)?;
        ColorHistogram::from_image(&image, bin_bits)
    }
}

/// A named dataset entry and the source of its histogram.
pub struct DatasetEntry {
    pub name: String,
    pub source: Box<dyn HistogramSource>,
}

impl DatasetEntry {
    pub fn new(name: impl Into<String>, source: Box<dyn HistogramSource>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Entry backed by a precomputed histogram file.
    pub fn histogram_file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, Box::new(HistogramFileSource::new(path)))
    }

    /// Entry backed by a raw image file processed like the query.
    pub fn image_file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::new(name, Box::new(RasterFileSource::new(path)))
    }
}
