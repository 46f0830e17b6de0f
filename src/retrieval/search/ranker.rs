//! Top-K ranking by histogram intersection.

use crate::retrieval::common::error::{Result, RetrievalError};
use crate::retrieval::histogram::ColorHistogram;

/// A scored dataset entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub name: String,
    pub score: f64,
}

/// Scores every dataset entry against the query and returns the best
/// `k`, highest similarity first.
///
/// The sort is stable, so entries with equal scores keep their dataset
/// order. A failed comparison is wrapped as `EntryFailed` with the
/// entry's name so the caller can decide to skip or abort. Scores are
/// meaningful as similarity percentages only when the query and every
/// entry are normalized. An empty dataset fails with `EmptyDataset`
/// unless `k` is zero, which returns an empty list.
pub fn rank_matches(
    query: &ColorHistogram,
    dataset: &[(String, ColorHistogram)],
    k: usize,
) -> Result<Vec<RankedMatch>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    if dataset.is_empty() {
        return Err(RetrievalError::EmptyDataset);
    }

    let mut matches = Vec::with_capacity(dataset.len());
    for (name, histogram) in dataset {
        let score = query
            .intersect(histogram)
            .map_err(|e| RetrievalError::EntryFailed {
                name: name.clone(),
                source: Box::new(e),
            })?;
        matches.push(RankedMatch {
            name: name.clone(),
            score,
        });
    }

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(k);
    Ok(matches)
}
