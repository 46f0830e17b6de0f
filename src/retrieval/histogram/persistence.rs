//! Text persistence for histograms.
//!
//! The format is a two-line record: line 1 is the bin count, line 2 holds
//! every bin value in index order, space-separated. The format does not
//! record whether the values are raw counts or probabilities; a loaded
//! histogram is always treated as raw, which keeps re-normalizing an
//! already-normalized file harmless (it divides by one).

use std::io::{BufRead, Write};

use tracing::debug;

use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::histogram::types::ColorHistogram;

impl ColorHistogram {
    /// Writes the two-line text record for this histogram.
    ///
    /// Values are written with Rust's shortest round-trip float
    /// formatting, so reading them back reproduces the bins exactly.
    pub fn write_into(&self, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "{}", self.len())?;

        let mut first = true;
        for bin in self.bins() {
            if first {
                first = false;
            } else {
                output.write_all(b" ")?;
            }
            write!(output, "{bin}")?;
        }
        writeln!(output)?;

        debug!("Wrote {}-bin histogram", self.len());
        Ok(())
    }

    /// Reads a histogram persisted by `write_into`.
    ///
    /// The count line is advisory: the array is sized from `bin_bits`,
    /// and the stream must hold exactly `1 << (3 * bin_bits)` value
    /// tokens. The result is a raw histogram whose sample count is the
    /// rounded sum of the stored values.
    pub fn read_from(input: &mut dyn BufRead, bin_bits: u32) -> Result<ColorHistogram> {
        if bin_bits == 0 || bin_bits > u16::BITS {
            return Err(RetrievalError::InvalidBinDepth(bin_bits));
        }

        let mut count_line = String::new();
        if input.read_line(&mut count_line)? == 0 {
            return Err(RetrievalError::FormatError(
                "missing bin count line".to_string(),
            ));
        }

        let mut values = String::new();
        input.read_to_string(&mut values)?;

        let expected = Self::bin_count(bin_bits);
        let mut bins = vec![0.0f64; expected];
        let mut total = 0.0f64;
        let mut filled = 0usize;
        for token in values.split_whitespace() {
            if filled == expected {
                return Err(RetrievalError::FormatError(
                    "trailing data after bin values".to_string(),
                ));
            }
            let value: f64 = token.parse().map_err(|_| {
                RetrievalError::FormatError(format!("invalid bin value '{token}'"))
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(RetrievalError::FormatError(format!(
                    "bin value {value} is not a non-negative number"
                )));
            }
            bins[filled] = value;
            total += value;
            filled += 1;
        }
        if filled < expected {
            return Err(RetrievalError::FormatError(format!(
                "expected {expected} bin values, found {filled}"
            )));
        }

        debug!("Read {}-bin histogram, total weight {}", expected, total);
        Ok(ColorHistogram::from_parts(
            bin_bits,
            bins,
            total.round() as u64,
            false,
        ))
    }
}
