use std::path::Path;

use tracing::{info, instrument};

use crate::retrieval::{
    common::error::{Result, RetrievalError},
    histogram::ColorHistogram,
    raster::{PlainTextReader, RasterReader, quantize::reduce_depth},
    search::{
        ranker::{RankedMatch, rank_matches},
        source::DatasetEntry,
        timing::{PipelineTimings, Timer},
        types::SearchConfig,
    },
};

pub struct SimilaritySearchPipeline<R: RasterReader> {
    reader: R,
    config: SearchConfig,
}

impl SimilaritySearchPipeline<PlainTextReader> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            reader: PlainTextReader,
            config,
        }
    }
}

impl<R: RasterReader> SimilaritySearchPipeline<R> {
    pub fn with_custom(reader: R, config: SearchConfig) -> Self {
        Self { reader, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(RetrievalError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(RetrievalError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes, depth-reduces, histograms, and normalizes a query image.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn query_histogram(&self, input_data: &[u8]) -> Result<ColorHistogram> {
        let mut image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.width,
                height = image.height
            )
            .entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        {
            let _span = tracing::info_span!("reduce_depth", bits = self.config.bin_bits).entered();
            reduce_depth(&mut image, self.config.bin_bits)?;
        }

        let mut histogram = {
            let _span = tracing::info_span!("build_histogram").entered();
            ColorHistogram::from_image(&image, self.config.bin_bits)?
        };
        histogram.normalize()?;

        Ok(histogram)
    }

    fn load_dataset(&self, dataset: &[DatasetEntry]) -> Result<Vec<(String, ColorHistogram)>> {
        let mut loaded = Vec::with_capacity(dataset.len());
        for entry in dataset {
            let histogram = entry
                .source
                .load(self.config.bin_bits)
                .and_then(|mut h| {
                    h.normalize()?;
                    Ok(h)
                })
                .map_err(|e| RetrievalError::EntryFailed {
                    name: entry.name.clone(),
                    source: Box::new(e),
                })?;
            loaded.push((entry.name.clone(), histogram));
        }
        Ok(loaded)
    }

    /// Ranks the dataset against a query image held in memory.
    #[instrument(skip(self, query_data, dataset), fields(dataset_size = dataset.len()))]
    pub fn search(&self, query_data: &[u8], dataset: &[DatasetEntry]) -> Result<Vec<RankedMatch>> {
        info!("Starting similarity search");

        let query = self.query_histogram(query_data)?;

        let loaded = {
            let _span = tracing::info_span!("load_dataset").entered();
            self.load_dataset(dataset)?
        };

        let ranked = rank_matches(&query, &loaded, self.config.result_count)?;

        info!(results = ranked.len(), "Search complete");
        Ok(ranked)
    }

    /// Ranks the dataset against a query image on disk.
    #[instrument(skip(self, query_path, dataset))]
    pub fn search_file<P: AsRef<Path>>(
        &self,
        query_path: P,
        dataset: &[DatasetEntry],
    ) -> Result<Vec<RankedMatch>> {
        let query_path = query_path.as_ref();

        info!(query = %query_path.display(), "Searching");

        let query_data = {
            let _span = tracing::info_span!("read_query_file").entered();
            std::fs::read(query_path).map_err(|e| {
                RetrievalError::InputReadError(format!("{}: {}", query_path.display(), e))
            })?
        };

        self.search(&query_data, dataset)
    }

    /// Same as `search`, but also reports how long each step took.
    pub fn search_with_timings(
        &self,
        query_data: &[u8],
        dataset: &[DatasetEntry],
    ) -> Result<(Vec<RankedMatch>, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("query_histogram");
        let query = self.query_histogram(query_data)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("load_dataset");
        let loaded = self.load_dataset(dataset)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("rank");
        let ranked = rank_matches(&query, &loaded, self.config.result_count)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok((ranked, timings))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }
}
