//! Raster image module
//!
//! This module provides decoding of plain-text raster images and in-place
//! color depth reduction.

mod reader;
mod plain_text_reader;
pub mod quantize;
pub mod types;

pub use reader::RasterReader;
pub use plain_text_reader::PlainTextReader;
pub use types::RasterImage;
