//! Color histogram module
//!
//! This module provides the quantized color-distribution histogram, its
//! intersection similarity measure, and text-format persistence.

mod persistence;
pub mod types;

pub use types::ColorHistogram;
