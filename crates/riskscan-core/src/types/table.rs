//! Tag table — the rectangular boolean feature table all analysis runs on.
//!
//! Columns are declared up front in a [`TagSchema`] rather than inferred
//! from runtime value types. Every record must supply a boolean for every
//! declared column; violations are rejected at construction, not
//! discovered mid-computation.

use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::types::collections::FxHashSet;

/// Explicit declaration of the boolean tag columns of a dataset.
///
/// Column names are unique identifiers; order is the canonical iteration
/// order for every derived artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSchema {
    columns: Vec<String>,
}

impl TagSchema {
    /// Declare a schema from an ordered list of column names.
    ///
    /// Duplicate names are rejected.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, TableError> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Rectangular records × boolean-columns table.
///
/// Immutable after construction. Row order is record order; column order
/// is schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagTable {
    schema: TagSchema,
    rows: Vec<Vec<bool>>,
}

impl TagTable {
    /// Build a table from a schema and per-record boolean rows.
    ///
    /// Every row must have exactly one value per schema column.
    pub fn new(schema: TagSchema, rows: Vec<Vec<bool>>) -> Result<Self, TableError> {
        let width = schema.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TableError::RaggedRow {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { schema, rows })
    }

    /// Parse a JSON array of `{column: bool}` records against a declared
    /// schema.
    ///
    /// Missing columns, non-boolean values, and undeclared columns are
    /// all load-time errors.
    pub fn from_json_records(schema: TagSchema, json: &str) -> Result<Self, TableError> {
        let records: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;

        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            for key in record.keys() {
                if schema.index_of(key).is_none() {
                    return Err(TableError::UnknownColumn(key.clone()));
                }
            }
            let mut row = Vec::with_capacity(schema.len());
            for column in schema.columns() {
                match record.get(column) {
                    Some(serde_json::Value::Bool(value)) => row.push(*value),
                    Some(_) => {
                        return Err(TableError::NotBoolean {
                            row: index,
                            column: column.clone(),
                        });
                    }
                    None => {
                        return Err(TableError::MissingValue {
                            row: index,
                            column: column.clone(),
                        });
                    }
                }
            }
            rows.push(row);
        }

        Self::new(schema, rows)
    }

    /// The declared schema.
    pub fn schema(&self) -> &TagSchema {
        &self.schema
    }

    /// Ordered column names.
    pub fn column_names(&self) -> &[String] {
        self.schema.columns()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.schema.len()
    }

    /// Number of records.
    pub fn num_records(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at (record, column) position.
    pub fn value(&self, row: usize, column: usize) -> bool {
        self.rows[row][column]
    }

    /// One record as a boolean slice in schema order.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.rows[row]
    }

    /// All records.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// A new table restricted to the named columns, in the given order.
    pub fn select_columns(&self, names: &[String]) -> Result<Self, TableError> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            match self.schema.index_of(name) {
                Some(index) => indices.push(index),
                None => return Err(TableError::UnknownColumn(name.clone())),
            }
        }
        let schema = TagSchema::new(names.iter().cloned())?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();
        Self::new(schema, rows)
    }

    /// A new table holding the given records, in the given order.
    ///
    /// Indices out of range are rejected.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, TableError> {
        let mut rows = Vec::with_capacity(indices.len());
        for &index in indices {
            let row = self
                .rows
                .get(index)
                .ok_or(TableError::RowOutOfRange { row: index })?;
            rows.push(row.clone());
        }
        Self::new(self.schema.clone(), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> TagSchema {
        TagSchema::new(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = TagSchema::new(["reentrancy", "overflow", "reentrancy"]);
        assert!(matches!(result, Err(TableError::DuplicateColumn(name)) if name == "reentrancy"));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = TagTable::new(schema(&["a", "b"]), vec![vec![true, false], vec![true]]);
        assert!(matches!(
            result,
            Err(TableError::RaggedRow { row: 1, expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_select_columns_reorders() {
        let table = TagTable::new(
            schema(&["a", "b", "c"]),
            vec![vec![true, false, true], vec![false, true, false]],
        )
        .unwrap();
        let subset = table
            .select_columns(&["c".to_string(), "a".to_string()])
            .unwrap();
        assert_eq!(subset.column_names(), &["c", "a"]);
        assert_eq!(subset.row(0), &[true, true]);
        assert_eq!(subset.row(1), &[false, false]);
    }

    #[test]
    fn test_select_unknown_column() {
        let table = TagTable::new(schema(&["a"]), vec![vec![true]]).unwrap();
        let result = table.select_columns(&["nope".to_string()]);
        assert!(matches!(result, Err(TableError::UnknownColumn(name)) if name == "nope"));
    }

    #[test]
    fn test_from_json_records_valid() {
        let json = r#"[
            {"reentrancy": true, "overflow": false},
            {"reentrancy": false, "overflow": false}
        ]"#;
        let table = TagTable::from_json_records(schema(&["reentrancy", "overflow"]), json).unwrap();
        assert_eq!(table.num_records(), 2);
        assert!(table.value(0, 0));
        assert!(!table.value(1, 1));
    }

    #[test]
    fn test_from_json_records_missing_column() {
        let json = r#"[{"reentrancy": true}]"#;
        let result = TagTable::from_json_records(schema(&["reentrancy", "overflow"]), json);
        assert!(matches!(
            result,
            Err(TableError::MissingValue { row: 0, column }) if column == "overflow"
        ));
    }

    #[test]
    fn test_from_json_records_non_boolean() {
        let json = r#"[{"reentrancy": 1}]"#;
        let result = TagTable::from_json_records(schema(&["reentrancy"]), json);
        assert!(matches!(result, Err(TableError::NotBoolean { row: 0, .. })));
    }

    #[test]
    fn test_from_json_records_undeclared_column() {
        let json = r#"[{"reentrancy": true, "extra": false}]"#;
        let result = TagTable::from_json_records(schema(&["reentrancy"]), json);
        assert!(matches!(result, Err(TableError::UnknownColumn(name)) if name == "extra"));
    }

    #[test]
    fn test_select_rows_out_of_range() {
        let table = TagTable::new(schema(&["a"]), vec![vec![true]]).unwrap();
        assert!(matches!(
            table.select_rows(&[0, 3]),
            Err(TableError::RowOutOfRange { row: 3 })
        ));
    }
}
