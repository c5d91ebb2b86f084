//! Generic top-K selection over scored entries.
//!
//! Reused for frequency series and for the unstacked association pairs.
//! Output is always in non-increasing score order; `k` larger than the
//! number of entries clips to all of them.

use riskscan_core::errors::{AnalysisError, AnalysisResult};

use crate::association::{PhiMatrix, PhiPair};
use crate::frequency::FrequencySeries;

/// Which end of the score range to select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    Largest,
    Smallest,
}

/// Select the `k` entries with the largest (or smallest) score.
///
/// Returns at most `k` entries, non-increasing by score. Ties keep the
/// original iteration order under `Largest`; both directions are fully
/// deterministic. `k` of 0 is rejected.
pub fn top_k<T, F>(
    items: impl IntoIterator<Item = T>,
    k: usize,
    direction: RankDirection,
    score: F,
) -> AnalysisResult<Vec<T>>
where
    F: Fn(&T) -> f64,
{
    if k == 0 {
        return Err(AnalysisError::InvalidTopCount(k));
    }

    let mut entries: Vec<T> = items.into_iter().collect();
    match direction {
        RankDirection::Largest => {
            entries.sort_by(|a, b| {
                score(b)
                    .partial_cmp(&score(a))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            entries.truncate(k);
        }
        RankDirection::Smallest => {
            entries.sort_by(|a, b| {
                score(a)
                    .partial_cmp(&score(b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            entries.truncate(k);
            entries.reverse();
        }
    }
    Ok(entries)
}

/// Rank frequency entries by count.
pub fn top_frequencies(
    series: &FrequencySeries,
    k: usize,
    direction: RankDirection,
) -> AnalysisResult<Vec<(String, u64)>> {
    top_k(series.entries().iter().cloned(), k, direction, |(_, count)| {
        *count as f64
    })
}

/// Rank association pairs by phi score, self-pairs excluded.
///
/// `dedupe` selects between the duplicated unstacked view and canonical
/// unordered pairs (see [`PhiMatrix::unstack`]).
pub fn top_pairs(matrix: &PhiMatrix, k: usize, dedupe: bool) -> AnalysisResult<Vec<PhiPair>> {
    top_k(matrix.unstack(dedupe), k, RankDirection::Largest, |pair| {
        pair.phi
    })
}
