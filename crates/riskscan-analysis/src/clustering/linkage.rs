//! Agglomerative hierarchical clustering with Ward's linkage.
//!
//! Lance–Williams recurrence over a precomputed distance matrix. Node ids
//! follow the linkage convention: leaves are `0..n-1`, the i-th merge
//! creates node `n + i`, and n leaves produce exactly n−1 merges.

use serde::Serialize;

use riskscan_core::types::collections::FxHashMap;

use super::distance::DistanceMatrix;

/// One agglomeration step: the two cluster ids merged, the distance at
/// which they merged, and the size of the resulting cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub distance: f64,
    pub size: usize,
}

/// Binary merge tree produced by hierarchical clustering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dendrogram {
    num_leaves: usize,
    merges: Vec<Merge>,
}

impl Dendrogram {
    /// Number of leaf records.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Merge steps in agglomeration order.
    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }
}

/// Cluster Ward-style: each step merges the pair whose union least
/// increases total within-cluster variance.
///
/// Tie-breaking is deterministic — the candidate pair with the lowest
/// cluster ids wins. Zero or one records yield a dendrogram with no
/// merges.
pub fn ward(distances: &DistanceMatrix) -> Dendrogram {
    let n = distances.len();
    if n < 2 {
        return Dendrogram {
            num_leaves: n,
            merges: Vec::new(),
        };
    }

    // Active clusters as (id, size), kept sorted by id.
    let mut active: Vec<(usize, usize)> = (0..n).map(|id| (id, 1)).collect();
    let mut pair_dist: FxHashMap<(usize, usize), f64> = FxHashMap::default();
    for i in 0..n {
        for j in (i + 1)..n {
            pair_dist.insert((i, j), distances.get(i, j));
        }
    }

    let mut merges = Vec::with_capacity(n - 1);
    for step in 0..(n - 1) {
        // Scan in id order so equal distances resolve to the lowest pair.
        let mut best_a = 0;
        let mut best_b = 1;
        let mut merge_dist = f64::INFINITY;
        for a in 0..active.len() {
            for b in (a + 1)..active.len() {
                let d = pair_dist[&(active[a].0, active[b].0)];
                if d < merge_dist {
                    best_a = a;
                    best_b = b;
                    merge_dist = d;
                }
            }
        }
        let (a, b) = (best_a, best_b);
        let (left_id, left_size) = active[a];
        let (right_id, right_size) = active[b];
        let new_id = n + step;
        let new_size = left_size + right_size;

        // Lance–Williams update for Ward's criterion.
        for &(other_id, other_size) in &active {
            if other_id == left_id || other_id == right_id {
                continue;
            }
            let d_lo = pair_dist[&ordered(left_id, other_id)];
            let d_ro = pair_dist[&ordered(right_id, other_id)];
            let total = (left_size + right_size + other_size) as f64;
            let squared = ((left_size + other_size) as f64 * d_lo * d_lo
                + (right_size + other_size) as f64 * d_ro * d_ro
                - other_size as f64 * merge_dist * merge_dist)
                / total;
            pair_dist.insert(ordered(new_id, other_id), squared.max(0.0).sqrt());
        }

        active.remove(b);
        active.remove(a);
        active.push((new_id, new_size));

        merges.push(Merge {
            left: left_id,
            right: right_id,
            distance: merge_dist,
            size: new_size,
        });
    }

    Dendrogram {
        num_leaves: n,
        merges,
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
