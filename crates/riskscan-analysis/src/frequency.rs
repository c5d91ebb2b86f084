//! Per-column frequency of `true` values.

use serde::Serialize;

use riskscan_core::types::TagTable;

/// Ordered column → count-of-true mapping, one entry per boolean column.
///
/// Entry order is the table's schema order, which makes tie handling in
/// downstream ranking deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencySeries {
    entries: Vec<(String, u64)>,
}

impl FrequencySeries {
    /// Entries in schema order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// Count for a column by name.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, count)| *count)
    }

    /// Number of columns counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no columns were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count `true` values per boolean column.
///
/// A table with no columns yields an empty series, not an error.
pub fn count_true(table: &TagTable) -> FrequencySeries {
    let num_columns = table.num_columns();
    let mut counts = vec![0u64; num_columns];
    for row in table.rows() {
        for (column, &value) in row.iter().enumerate() {
            if value {
                counts[column] += 1;
            }
        }
    }
    let entries = table
        .column_names()
        .iter()
        .cloned()
        .zip(counts)
        .collect();
    FrequencySeries { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskscan_core::types::TagSchema;

    fn table(names: &[&str], rows: Vec<Vec<bool>>) -> TagTable {
        TagTable::new(TagSchema::new(names.iter().copied()).unwrap(), rows).unwrap()
    }

    #[test]
    fn test_counts_per_column() {
        let t = table(
            &["a", "b", "c"],
            vec![
                vec![true, false, false],
                vec![true, true, false],
                vec![true, false, false],
            ],
        );
        let freqs = count_true(&t);
        assert_eq!(freqs.get("a"), Some(3));
        assert_eq!(freqs.get("b"), Some(1));
        assert_eq!(freqs.get("c"), Some(0));
    }

    #[test]
    fn test_counts_bounded_by_record_count() {
        let t = table(&["a"], vec![vec![true], vec![true]]);
        let freqs = count_true(&t);
        assert!(freqs.get("a").unwrap() <= t.num_records() as u64);
    }

    #[test]
    fn test_no_columns_yields_empty_series() {
        let t = table(&[], vec![vec![], vec![]]);
        let freqs = count_true(&t);
        assert!(freqs.is_empty());
    }

    #[test]
    fn test_no_records_yields_zero_counts() {
        let t = table(&["a", "b"], vec![]);
        let freqs = count_true(&t);
        assert_eq!(freqs.get("a"), Some(0));
        assert_eq!(freqs.get("b"), Some(0));
    }

    #[test]
    fn test_preserves_schema_order() {
        let t = table(&["z", "a"], vec![vec![false, true]]);
        let freqs = count_true(&t);
        let names: Vec<&str> = freqs
            .entries()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, ["z", "a"]);
    }
}
