//! Record clustering over a feature subset.
//!
//! Input preparation (top/bottom-N column subset, capped deterministic
//! sampling), pairwise Jaccard distances, and agglomerative hierarchical
//! clustering with Ward's linkage.

pub mod distance;
pub mod linkage;
pub mod sampling;

pub use distance::DistanceMatrix;
pub use linkage::{Dendrogram, Merge};
pub use sampling::SampledTable;

use riskscan_core::errors::{AnalysisError, AnalysisResult};
use riskscan_core::types::TagTable;

use crate::frequency;
use crate::ranking::{self, RankDirection};

/// Restrict a table to its `n` most- (or least-) frequent boolean columns.
///
/// The input-preparation contract of the clustering engine. `n` of 0 is
/// rejected; a table with no boolean columns yields an empty selection,
/// which is rejected rather than silently clustered.
pub fn select_features(
    table: &TagTable,
    n: usize,
    direction: RankDirection,
) -> AnalysisResult<TagTable> {
    let frequencies = frequency::count_true(table);
    let ranked = ranking::top_frequencies(&frequencies, n, direction)?;
    if ranked.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }
    let names: Vec<String> = ranked.into_iter().map(|(name, _)| name).collect();
    Ok(table.select_columns(&names)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskscan_core::types::TagSchema;

    fn table(names: &[&str], rows: Vec<Vec<bool>>) -> TagTable {
        TagTable::new(TagSchema::new(names.iter().copied()).unwrap(), rows).unwrap()
    }

    #[test]
    fn test_select_most_frequent() {
        let t = table(
            &["rare", "common", "mid"],
            vec![
                vec![false, true, true],
                vec![false, true, false],
                vec![true, true, true],
            ],
        );
        let subset = select_features(&t, 2, RankDirection::Largest).unwrap();
        assert_eq!(subset.column_names(), &["common", "mid"]);
        assert_eq!(subset.num_records(), 3);
    }

    #[test]
    fn test_select_least_frequent() {
        let t = table(
            &["rare", "common"],
            vec![vec![false, true], vec![false, true], vec![true, true]],
        );
        let subset = select_features(&t, 1, RankDirection::Smallest).unwrap();
        assert_eq!(subset.column_names(), &["rare"]);
    }

    #[test]
    fn test_n_clipped_to_column_count() {
        let t = table(&["a", "b"], vec![vec![true, false]]);
        let subset = select_features(&t, 10, RankDirection::Largest).unwrap();
        assert_eq!(subset.num_columns(), 2);
    }

    #[test]
    fn test_zero_n_rejected() {
        let t = table(&["a"], vec![vec![true]]);
        assert!(matches!(
            select_features(&t, 0, RankDirection::Largest),
            Err(AnalysisError::InvalidTopCount(0))
        ));
    }

    #[test]
    fn test_empty_selection_rejected() {
        let t = table(&[], vec![vec![], vec![]]);
        assert!(matches!(
            select_features(&t, 3, RankDirection::Largest),
            Err(AnalysisError::EmptySelection)
        ));
    }
}
