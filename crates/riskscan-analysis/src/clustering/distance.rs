//! Pairwise Jaccard distance over records.

use serde::Serialize;

use riskscan_core::types::TagTable;

/// Jaccard distance between two boolean vectors.
///
/// 1 − |intersection| / |union|, counted over positions where at least
/// one vector is true. Two all-false vectors are at distance 0.0 by
/// policy — no true positions means nothing to distinguish them.
pub fn jaccard_distance(a: &[bool], b: &[bool]) -> f64 {
    let mut intersection = 0u32;
    let mut union = 0u32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        if x || y {
            union += 1;
            if x && y {
                intersection += 1;
            }
        }
    }
    if union == 0 {
        return 0.0;
    }
    1.0 - intersection as f64 / union as f64
}

/// Square record × record distance matrix. Symmetric, zero diagonal,
/// values in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    n: usize,
    /// Row-major dense values, `n` squared.
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute pairwise Jaccard distances between all records of a table.
    pub fn compute(table: &TagTable) -> Self {
        let n = table.num_records();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = jaccard_distance(table.row(i), table.row(j));
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is zero-dimensional.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between records `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }
}
