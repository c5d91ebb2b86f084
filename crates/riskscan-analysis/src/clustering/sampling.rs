//! Capped deterministic record sampling.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use riskscan_core::errors::{AnalysisError, AnalysisResult};
use riskscan_core::types::TagTable;

/// A (possibly) down-sampled table plus the original index of each kept
/// record, so dendrogram leaves map back to source rows.
#[derive(Debug, Clone)]
pub struct SampledTable {
    pub table: TagTable,
    pub indices: Vec<usize>,
}

/// Cap the record count, drawing a seeded random sample when exceeded.
///
/// At most `cap` records survive. Tables at or under the cap pass through
/// untouched. The sample is drawn without replacement from a
/// `ChaCha8Rng` seeded with `seed`, so results reproduce across runs and
/// platforms; sampled records keep their drawn order.
pub fn sample_records(table: &TagTable, cap: usize, seed: u64) -> AnalysisResult<SampledTable> {
    if cap == 0 {
        return Err(AnalysisError::InvalidSampleCap(cap));
    }

    let total = table.num_records();
    if total <= cap {
        return Ok(SampledTable {
            table: table.clone(),
            indices: (0..total).collect(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let indices: Vec<usize> = rand::seq::index::sample(&mut rng, total, cap).into_vec();
    let sampled = table.select_rows(&indices)?;
    Ok(SampledTable {
        table: sampled,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskscan_core::types::TagSchema;

    fn table(records: usize) -> TagTable {
        let schema = TagSchema::new(["a", "b"]).unwrap();
        let rows = (0..records).map(|i| vec![i % 2 == 0, i % 3 == 0]).collect();
        TagTable::new(schema, rows).unwrap()
    }

    #[test]
    fn test_under_cap_passes_through() {
        let t = table(5);
        let sampled = sample_records(&t, 10, 42).unwrap();
        assert_eq!(sampled.table.num_records(), 5);
        assert_eq!(sampled.indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_over_cap_draws_exactly_cap() {
        let t = table(50);
        let sampled = sample_records(&t, 10, 42).unwrap();
        assert_eq!(sampled.table.num_records(), 10);
        assert_eq!(sampled.indices.len(), 10);
        let mut unique = sampled.indices.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 10, "sample must be without replacement");
    }

    #[test]
    fn test_fixed_seed_reproduces() {
        let t = table(100);
        let first = sample_records(&t, 20, 42).unwrap();
        let second = sample_records(&t, 20, 42).unwrap();
        assert_eq!(first.indices, second.indices);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let t = table(100);
        let first = sample_records(&t, 20, 1).unwrap();
        let second = sample_records(&t, 20, 2).unwrap();
        assert_ne!(first.indices, second.indices);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let t = table(5);
        assert!(matches!(
            sample_records(&t, 0, 42),
            Err(AnalysisError::InvalidSampleCap(0))
        ));
    }

    #[test]
    fn test_sampled_rows_match_source() {
        let t = table(50);
        let sampled = sample_records(&t, 10, 7).unwrap();
        for (position, &original) in sampled.indices.iter().enumerate() {
            assert_eq!(sampled.table.row(position), t.row(original));
        }
    }
}
