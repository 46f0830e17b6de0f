//! Color-similarity retrieval module
//!
//! This module provides content-based image retrieval: a query image is
//! decoded, reduced to a coarse color depth, histogrammed, and compared
//! against a dataset of histograms by histogram intersection.

pub mod common;
pub mod raster;
pub mod histogram;
pub mod search;


pub use common::{
    RetrievalError,
    Result,
};

pub use raster::{
    RasterImage,
    RasterReader,
    PlainTextReader,
};

pub use histogram::ColorHistogram;

pub use search::{
    SearchConfig,
    SearchConfigBuilder,
    DatasetEntry,
    HistogramSource,
    RankedMatch,
    SimilaritySearchPipeline,
};
