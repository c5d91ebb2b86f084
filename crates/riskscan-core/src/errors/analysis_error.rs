//! Analysis parameter errors.
//!
//! Invalid parameters are rejected before any computation starts; numeric
//! degeneracies (constant columns, all-false record pairs) are resolved to
//! defined scores by policy and are deliberately not represented here.

use super::error_code::{self, RiskscanErrorCode};
use super::TableError;

/// Errors raised by the analysis engine before computation proceeds.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Top count must be positive, got {0}")]
    InvalidTopCount(usize),

    #[error("Sample cap must be positive, got {0}")]
    InvalidSampleCap(usize),

    #[error("Selected column subset is empty")]
    EmptySelection,

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl RiskscanErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Table(e) => e.error_code(),
            _ => error_code::ANALYSIS_ERROR,
        }
    }
}

/// Result alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
