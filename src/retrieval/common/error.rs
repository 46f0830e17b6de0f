use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Malformed input: {0}")]
    FormatError(String),

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    PixelOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Channel value {value} does not fit in {bin_bits} bin bits")]
    BinOutOfRange { value: u16, bin_bits: u32 },

    #[error("Cannot compare a {0}-bin histogram with a {1}-bin histogram")]
    DimensionMismatch(usize, usize),

    #[error("Cannot reduce {current}-bit channels to {target} bits")]
    InvalidDepth { current: u32, target: u32 },

    #[error("Bin depth must be between 1 and 16 bits, got {0}")]
    InvalidBinDepth(u32),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Histogram is already normalized")]
    AlreadyNormalized,

    #[error("Histogram has no samples to normalize")]
    EmptyHistogram,

    #[error("Dataset contains no entries")]
    EmptyDataset,

    #[error("Dataset entry '{name}': {source}")]
    EntryFailed {
        name: String,
        source: Box<RetrievalError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
