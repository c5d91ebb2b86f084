//! Top-level EDA pipeline orchestrator.
//!
//! One batch run over a tag table: frequencies → ranked frequencies → phi
//! matrix → ranked related pairs → feature subset → capped deterministic
//! sample → distance matrix → dendrogram. Every parameter is validated
//! before any computation starts.

use serde::Serialize;
use tracing::{debug, info};

use riskscan_core::config::EdaConfig;
use riskscan_core::errors::{AnalysisError, AnalysisResult};
use riskscan_core::types::TagTable;

use crate::association::{PhiMatrix, PhiPair};
use crate::clustering::{self, Dendrogram, DistanceMatrix};
use crate::frequency::{self, FrequencySeries};
use crate::ranking::{self, RankDirection};

/// Every artifact derived from one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct EdaReport {
    /// Per-column true counts, schema order.
    pub frequencies: FrequencySeries,
    /// Ranked frequency entries, non-increasing.
    pub top_frequencies: Vec<(String, u64)>,
    /// Full symmetric association matrix.
    pub phi: PhiMatrix,
    /// Ranked association pairs, self-pairs excluded.
    pub related_pairs: Vec<PhiPair>,
    /// Original record index of each clustered leaf, in leaf order.
    pub clustered_records: Vec<usize>,
    /// Record × record Jaccard distances over the clustered subset.
    pub distances: DistanceMatrix,
    /// Ward merge tree over the clustered records.
    pub dendrogram: Dendrogram,
}

/// Single-pass, in-memory EDA over a boolean tag table.
pub struct EdaPipeline {
    config: EdaConfig,
}

impl EdaPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: EdaConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EdaConfig::default())
    }

    /// Run the full analysis over one table snapshot.
    pub fn run(&self, table: &TagTable) -> AnalysisResult<EdaReport> {
        let rank_count = self.config.effective_rank_count();
        let top_count = self.config.effective_top_count();
        let sample_cap = self.config.effective_sample_cap();
        if rank_count == 0 {
            return Err(AnalysisError::InvalidTopCount(rank_count));
        }
        if sample_cap == 0 {
            return Err(AnalysisError::InvalidSampleCap(sample_cap));
        }

        info!(
            records = table.num_records(),
            columns = table.num_columns(),
            "starting EDA run"
        );

        let frequencies = frequency::count_true(table);
        debug!(columns = frequencies.len(), "frequencies counted");

        let frequency_direction = if self.config.effective_use_top() {
            RankDirection::Largest
        } else {
            RankDirection::Smallest
        };
        let top_frequencies =
            ranking::top_frequencies(&frequencies, rank_count, frequency_direction)?;

        let phi = PhiMatrix::compute(table);
        debug!(dimension = phi.len(), "association matrix computed");

        let related_pairs =
            ranking::top_pairs(&phi, rank_count, self.config.effective_dedupe_pairs())?;

        let subset = clustering::select_features(table, top_count, frequency_direction)?;
        let sampled = clustering::sampling::sample_records(
            &subset,
            sample_cap,
            self.config.effective_seed(),
        )?;
        debug!(
            selected_columns = subset.num_columns(),
            clustered = sampled.table.num_records(),
            "clustering subset prepared"
        );

        let distances = DistanceMatrix::compute(&sampled.table);
        let dendrogram = clustering::linkage::ward(&distances);

        info!(
            ranked_pairs = related_pairs.len(),
            merges = dendrogram.merges().len(),
            "EDA run complete"
        );

        Ok(EdaReport {
            frequencies,
            top_frequencies,
            phi,
            related_pairs,
            clustered_records: sampled.indices,
            distances,
            dendrogram,
        })
    }
}
