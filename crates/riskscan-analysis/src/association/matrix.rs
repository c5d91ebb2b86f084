//! Symmetric phi-coefficient matrix over all column pairs.

use serde::Serialize;

use riskscan_core::types::TagTable;

use super::phi::ContingencyTable;

/// Square, symmetric association matrix over a table's boolean columns.
///
/// Diagonal entries are 1 by definition — a column's association with
/// itself — even when the column is constant and the pairwise statistic
/// would be a 0/0 form. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhiMatrix {
    columns: Vec<String>,
    /// Row-major dense values, `columns.len()` squared.
    values: Vec<f64>,
}

/// One (column, column, score) entry of the unstacked matrix view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhiPair {
    pub a: String,
    pub b: String,
    pub phi: f64,
}

impl PhiMatrix {
    /// Compute the full association matrix for a table.
    ///
    /// O(C² · R): the upper triangle is tallied once per unordered pair
    /// and mirrored.
    pub fn compute(table: &TagTable) -> Self {
        let columns: Vec<String> = table.column_names().to_vec();
        let c = columns.len();
        let mut values = vec![0.0; c * c];

        for i in 0..c {
            values[i * c + i] = 1.0;
            for j in (i + 1)..c {
                let phi = ContingencyTable::from_columns(table, i, j).phi();
                values[i * c + j] = phi;
                values[j * c + i] = phi;
            }
        }

        Self { columns, values }
    }

    /// Ordered column names labeling both axes.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Matrix dimension (number of columns).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the matrix is zero-dimensional.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Score at (row, column) position.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.columns.len() + b]
    }

    /// Score for a named column pair.
    pub fn get_named(&self, a: &str, b: &str) -> Option<f64> {
        let ia = self.columns.iter().position(|c| c == a)?;
        let ib = self.columns.iter().position(|c| c == b)?;
        Some(self.get(ia, ib))
    }

    /// Unstack the matrix into (A, B, score) pairs, self-pairs excluded.
    ///
    /// With `dedupe = false` each unordered pair appears twice — once as
    /// (A,B) and once as (B,A) — matching the raw unstacked view of a
    /// symmetric matrix. With `dedupe = true` pairs are canonicalized so A
    /// precedes B in column order and each unordered pair appears once.
    pub fn unstack(&self, dedupe: bool) -> Vec<PhiPair> {
        let c = self.columns.len();
        let mut pairs = Vec::new();
        for i in 0..c {
            let start = if dedupe { i + 1 } else { 0 };
            for j in start..c {
                if i == j {
                    continue;
                }
                pairs.push(PhiPair {
                    a: self.columns[i].clone(),
                    b: self.columns[j].clone(),
                    phi: self.get(i, j),
                });
            }
        }
        pairs
    }
}
