//! Similarity search module
//!
//! This module contains orchestration logic for ranking a dataset of
//! histograms against a query image.

mod pipeline;
mod ranker;
mod source;
pub mod timing;
pub mod types;

pub use pipeline::SimilaritySearchPipeline;
pub use ranker::{RankedMatch, rank_matches};
pub use source::{DatasetEntry, HistogramFileSource, HistogramSource, RasterFileSource};
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{SearchConfig, SearchConfigBuilder};
