//! 2×2 contingency table and phi coefficient.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use riskscan_core::types::TagTable;

/// Co-occurrence counts of two boolean columns across all records.
///
/// `n11` counts records where both columns are true, `n10` where only the
/// first is, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    pub n11: u64,
    pub n10: u64,
    pub n01: u64,
    pub n00: u64,
}

impl ContingencyTable {
    /// Tally co-occurrence counts for two columns of a table.
    pub fn from_columns(table: &TagTable, a: usize, b: usize) -> Self {
        let mut counts = Self {
            n11: 0,
            n10: 0,
            n01: 0,
            n00: 0,
        };
        for row in table.rows() {
            match (row[a], row[b]) {
                (true, true) => counts.n11 += 1,
                (true, false) => counts.n10 += 1,
                (false, true) => counts.n01 += 1,
                (false, false) => counts.n00 += 1,
            }
        }
        counts
    }

    /// Total number of records tallied.
    pub fn total(&self) -> u64 {
        self.n11 + self.n10 + self.n01 + self.n00
    }

    /// Whether either variable is constant across all records.
    ///
    /// A constant variable collapses the table to a single row or column
    /// and makes the chi-square statistic a 0/0 form.
    pub fn is_degenerate(&self) -> bool {
        let row1 = self.n11 + self.n10;
        let row0 = self.n01 + self.n00;
        let col1 = self.n11 + self.n01;
        let col0 = self.n10 + self.n00;
        row1 == 0 || row0 == 0 || col1 == 0 || col0 == 0
    }

    /// Chi-square statistic without continuity correction.
    ///
    /// Degenerate tables (constant variable, or no records) score 0.0 by
    /// policy rather than propagating NaN.
    pub fn chi_square(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let n11 = self.n11 as f64;
        let n10 = self.n10 as f64;
        let n01 = self.n01 as f64;
        let n00 = self.n00 as f64;
        let n = self.total() as f64;

        let diff = n11 * n00 - n10 * n01;
        let denom = (n11 + n10) * (n01 + n00) * (n11 + n01) * (n10 + n00);
        n * diff * diff / denom
    }

    /// Phi coefficient: sqrt(chi2 / N), sign discarded, in [0, 1].
    ///
    /// Same degenerate policy as [`chi_square`](Self::chi_square): a
    /// constant variable yields 0.0.
    pub fn phi(&self) -> f64 {
        let n = self.total();
        if n == 0 || self.is_degenerate() {
            return 0.0;
        }
        (self.chi_square() / n as f64).sqrt().min(1.0)
    }

    /// Chi-square p-value at 1 degree of freedom.
    ///
    /// Degenerate tables report 1.0 (no evidence of association).
    pub fn significance(&self) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        let chi2 = self.chi_square();
        match ChiSquared::new(1.0) {
            Ok(dist) => {
                let p = 1.0 - dist.cdf(chi2);
                if p.is_finite() {
                    p.clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
            Err(_) => 1.0,
        }
    }
}
