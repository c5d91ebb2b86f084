//! Table construction and loading errors.

use super::error_code::{self, RiskscanErrorCode};

/// Errors raised while declaring a schema or building a tag table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Duplicate column in schema: {0}")]
    DuplicateColumn(String),

    #[error("Ragged row {row}: expected {expected} values, got {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Record {row} is missing a value for column {column}")]
    MissingValue { row: usize, column: String },

    #[error("Record {row} holds a non-boolean value for column {column}")]
    NotBoolean { row: usize, column: String },

    #[error("Record index {row} is out of range")]
    RowOutOfRange { row: usize },

    #[error("Failed to parse records: {0}")]
    Parse(String),
}

impl RiskscanErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
