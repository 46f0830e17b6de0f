//! Search configuration types

/// Configuration for a similarity search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Bits per channel used for histogram binning
    pub bin_bits: u32,
    /// Number of ranked results to return
    pub result_count: usize,
    /// Whether to validate query image dimensions before histogramming
    pub validate_dimensions: bool,
    /// Upper bound on either query dimension, when validation is enabled
    pub max_dimension: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bin_bits: 3,
            result_count: 5,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

/// Builder for SearchConfig
#[derive(Default)]
pub struct SearchConfigBuilder {
    bin_bits: Option<u32>,
    result_count: Option<usize>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl SearchConfigBuilder {
    pub fn bin_bits(mut self, bits: u32) -> Self {
        self.bin_bits = Some(bits);
        self
    }

    pub fn result_count(mut self, count: usize) -> Self {
        self.result_count = Some(count);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> SearchConfig {
        let default = SearchConfig::default();
        SearchConfig {
            bin_bits: self.bin_bits.unwrap_or(default.bin_bits),
            result_count: self.result_count.unwrap_or(default.result_count),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
