use log::debug;

use super::{sweep_reduce, Reducer};
use crate::columns::Column;
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;

/// The standard left-to-right column-addition algorithm of
/// [Edelsbrunner et al.](https://doi.org/10.1109/SFCS.2000.892133). No
/// optimizations; every other reducer in this crate is measured against it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardReducer;

impl<C: Column> Reducer<C> for StandardReducer {
    fn reduce(matrix: &mut BoundaryMatrix<C>, _options: &ReductionOptions) {
        let n = matrix.num_cols();
        debug!("standard: reducing {n} columns");
        let order: Vec<usize> = (0..n).collect();
        sweep_reduce(matrix, &order, false);
        debug!("standard: done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::VecColumn;
    use crate::reducers::test_scenarios::*;
    use hashbrown::HashSet;
    use proptest::collection::hash_set;
    use proptest::prelude::*;

    #[test]
    fn extracts_expected_triangle_pairs() {
        let mut m = triangle();
        StandardReducer::reduce(&mut m, &ReductionOptions::default());
        assert_eq!(m.max_index(3), Some(1));
        assert_eq!(m.max_index(4), Some(2));
        assert_eq!(m.max_index(6), Some(5));
        assert!(m.is_empty(0));
    }

    #[test]
    fn two_points_are_essential() {
        let mut m = two_points();
        StandardReducer::reduce(&mut m, &ReductionOptions::default());
        assert!(m.is_empty(0));
        assert!(m.is_empty(1));
    }

    fn veccolumn_with_idxs_below(mut max_idx: usize) -> impl Strategy<Value = VecColumn> {
        if max_idx == 0 {
            max_idx = 1;
        }
        hash_set(0..max_idx, 0..max_idx).prop_map(|set| {
            let mut col: Vec<_> = set.into_iter().collect();
            col.sort_unstable();
            VecColumn::from((0, col))
        })
    }

    fn sut_matrix(size: usize) -> impl Strategy<Value = BoundaryMatrix<VecColumn>> {
        (1..size)
            .map(veccolumn_with_idxs_below)
            .collect::<Vec<_>>()
            .prop_map(|cols| cols.into_iter().collect())
    }

    proptest! {
        #[test]
        fn reduction_is_low_injective(mut matrix in sut_matrix(40)) {
            StandardReducer::reduce(&mut matrix, &ReductionOptions::default());
            let mut seen = HashSet::new();
            for j in 0..matrix.num_cols() {
                if let Some(low) = matrix.max_index(j) {
                    prop_assert!(seen.insert(low), "low {low} claimed by more than one column");
                }
            }
        }
    }
}
