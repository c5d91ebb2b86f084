//! Property tests over arbitrary small tag tables.

use proptest::prelude::*;

use riskscan_analysis::association::PhiMatrix;
use riskscan_analysis::clustering::{linkage, DistanceMatrix};
use riskscan_analysis::frequency;
use riskscan_core::types::{TagSchema, TagTable};

fn arb_table() -> impl Strategy<Value = TagTable> {
    (1usize..5).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), columns), 0..12).prop_map(
            move |rows| {
                let names: Vec<String> = (0..columns).map(|i| format!("t{i}")).collect();
                TagTable::new(TagSchema::new(names).unwrap(), rows).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn phi_matrix_is_symmetric_with_unit_diagonal(table in arb_table()) {
        let matrix = PhiMatrix::compute(&table);
        for i in 0..matrix.len() {
            prop_assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.len() {
                let v = matrix.get(i, j);
                prop_assert!(v.is_finite());
                prop_assert!((0.0..=1.0).contains(&v));
                prop_assert!((v - matrix.get(j, i)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn frequencies_bounded_by_record_count(table in arb_table()) {
        let records = table.num_records() as u64;
        for (_, count) in frequency::count_true(&table).entries() {
            prop_assert!(*count <= records);
        }
    }

    #[test]
    fn distance_matrix_is_symmetric_zero_diagonal(table in arb_table()) {
        let matrix = DistanceMatrix::compute(&table);
        for i in 0..matrix.len() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.len() {
                let d = matrix.get(i, j);
                prop_assert!((0.0..=1.0).contains(&d));
                prop_assert!((d - matrix.get(j, i)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ward_produces_one_fewer_merges_than_leaves(table in arb_table()) {
        let matrix = DistanceMatrix::compute(&table);
        let tree = linkage::ward(&matrix);
        let expected = table.num_records().saturating_sub(1);
        prop_assert_eq!(tree.merges().len(), expected);
        for merge in tree.merges() {
            prop_assert!(merge.distance.is_finite());
            prop_assert!(merge.distance >= 0.0);
        }
    }
}
