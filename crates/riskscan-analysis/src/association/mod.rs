//! Pairwise association between boolean columns.
//!
//! Phi coefficient over every column pair: the chi-square statistic of the
//! 2×2 co-occurrence table (no continuity correction), normalized to [0,1]
//! by sqrt(chi2 / N).

pub mod matrix;
pub mod phi;

pub use matrix::{PhiMatrix, PhiPair};
pub use phi::ContingencyTable;
