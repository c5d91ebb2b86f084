//! Analysis engine for boolean risk-tag tables.
//!
//! Four computational parts — per-tag frequency counting, pairwise phi
//! association, top-K ranking, and Jaccard/Ward hierarchical clustering —
//! composed into one batch pipeline, with pluggable renderers for the
//! derived artifacts.

pub mod association;
pub mod clustering;
pub mod frequency;
pub mod pipeline;
pub mod ranking;
pub mod render;

pub use association::{ContingencyTable, PhiMatrix, PhiPair};
pub use clustering::{Dendrogram, DistanceMatrix, Merge};
pub use frequency::FrequencySeries;
pub use pipeline::{EdaPipeline, EdaReport};
pub use ranking::RankDirection;
