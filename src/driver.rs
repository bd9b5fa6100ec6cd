//! Thin glue from (reducer, matrix) to persistence pairs, in the shape of
//! PHAT's `compute_persistence_pairs`/`compute_persistence_pairs_dualized`
//! function pair, generalized to this crate's [`Reducer`] trait.

use log::info;

use crate::columns::Column;
use crate::diagram::{extract, PersistenceDiagram};
use crate::dualize::{dualize, dualize_pairs};
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;
use crate::reducers::{Reducer, TwistReducer};

/// Reduces `matrix` in place with `R` and reads the resulting diagram off.
pub fn compute<C: Column, R: Reducer<C>>(matrix: &mut BoundaryMatrix<C>, options: &ReductionOptions) -> PersistenceDiagram {
    info!("compute: {} columns", matrix.num_cols());
    R::reduce(matrix, options);
    extract(matrix)
}

/// Computes the diagram via the dual (anti-transposed) complex: dualizes the
/// matrix, reduces and extracts as in [`compute`], then maps the pairs back
/// to the original index space.
pub fn compute_dualized<C: Column, R: Reducer<C>>(matrix: &BoundaryMatrix<C>, options: &ReductionOptions) -> PersistenceDiagram {
    let n = matrix.num_cols();
    info!("compute_dualized: {n} columns");
    let mut dual = dualize(matrix);
    R::reduce(&mut dual, options);
    let mut diagram = extract(&mut dual);
    diagram.pairs = dualize_pairs(diagram.pairs, n);
    diagram.essential = diagram.essential.into_iter().map(|i| n - 1 - i).collect();
    diagram
}

/// Convenience entry point using the default reducer (`twist`), matching
/// PHAT's default `twist_reduction`.
pub fn compute_default<C: Column>(matrix: &mut BoundaryMatrix<C>, options: &ReductionOptions) -> PersistenceDiagram {
    compute::<C, TwistReducer>(matrix, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{BTreeSetColumn, BitSetColumn, BitTreePivotColumn, HeapPivotColumn, SparsePivotColumn, VecColumn, VecHeapColumn};
    use crate::reducers::test_scenarios::*;
    use crate::reducers::{ChunkReducer, StandardReducer};
    use bit_set::BitSet;
    use proptest::collection::hash_set;
    use proptest::prelude::*;

    #[test]
    fn dualization_agrees_on_triangle() {
        let m = triangle();
        let mut direct = m.clone();
        let mut direct_diagram = compute::<_, TwistReducer>(&mut direct, &ReductionOptions::default());
        direct_diagram.pairs.sort();

        let mut dual_diagram = compute_dualized::<_, TwistReducer>(&m, &ReductionOptions::default());
        dual_diagram.pairs.sort();

        assert_eq!(direct_diagram.pairs, dual_diagram.pairs);
        assert_eq!(direct_diagram.essential, dual_diagram.essential);
    }

    #[test]
    fn reducer_equivalence_on_filled_tetrahedron() {
        let mut standard_m = filled_tetrahedron();
        let mut chunk_m = filled_tetrahedron();
        let mut standard_diagram = compute::<_, StandardReducer>(&mut standard_m, &ReductionOptions::default());
        let options = ReductionOptions {
            chunk_size: Some(4),
            ..Default::default()
        };
        let mut chunk_diagram = compute::<_, ChunkReducer>(&mut chunk_m, &options);
        standard_diagram.pairs.sort();
        chunk_diagram.pairs.sort();
        assert_eq!(standard_diagram.pairs, chunk_diagram.pairs);
        assert_eq!(standard_diagram.essential, chunk_diagram.essential);
    }

    fn sut_rows(size: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1..size)
            .map(|max_idx| {
                hash_set(0..max_idx.max(1), 0..max_idx.max(1)).prop_map(|set| {
                    let mut col: Vec<_> = set.into_iter().collect();
                    col.sort_unstable();
                    col
                })
            })
            .collect::<Vec<_>>()
    }

    fn build<C>(rows: &[Vec<usize>]) -> BoundaryMatrix<C>
    where
        C: Column,
        C::EntriesRepr: FromIterator<usize>,
    {
        rows.iter()
            .map(|r| C::from((0, r.iter().copied().collect())))
            .collect()
    }

    proptest! {
        #[test]
        fn representation_equivalence(rows in sut_rows(25)) {
            let mut vec_m: BoundaryMatrix<VecColumn> = build(&rows);
            let mut btree_m: BoundaryMatrix<BTreeSetColumn> = build(&rows);
            let mut heap_m: BoundaryMatrix<VecHeapColumn> = build(&rows);
            let mut sparse_m: BoundaryMatrix<SparsePivotColumn> = build(&rows);
            let mut heap_pivot_m: BoundaryMatrix<HeapPivotColumn> = build(&rows);
            let mut tree_m: BoundaryMatrix<BitTreePivotColumn> = build(&rows);
            let mut bitset_m: BoundaryMatrix<BitSetColumn> = rows
                .iter()
                .map(|r| BitSetColumn::from((0, r.iter().copied().collect::<BitSet>())))
                .collect();

            let mut reference = compute::<_, StandardReducer>(&mut vec_m, &ReductionOptions::default());
            let mut d_btree = compute::<_, StandardReducer>(&mut btree_m, &ReductionOptions::default());
            let mut d_heap = compute::<_, StandardReducer>(&mut heap_m, &ReductionOptions::default());
            let mut d_sparse = compute::<_, StandardReducer>(&mut sparse_m, &ReductionOptions::default());
            let mut d_heap_pivot = compute::<_, StandardReducer>(&mut heap_pivot_m, &ReductionOptions::default());
            let mut d_tree = compute::<_, StandardReducer>(&mut tree_m, &ReductionOptions::default());
            let mut d_bitset = compute::<_, StandardReducer>(&mut bitset_m, &ReductionOptions::default());

            reference.pairs.sort();
            for d in [&mut d_btree, &mut d_heap, &mut d_sparse, &mut d_heap_pivot, &mut d_tree, &mut d_bitset] {
                d.pairs.sort();
                prop_assert_eq!(&reference.pairs, &d.pairs);
                prop_assert_eq!(&reference.essential, &d.essential);
            }
        }
    }

    #[test]
    fn default_reducer_is_twist() {
        let m = triangle();
        let mut by_default = m.clone();
        let mut by_twist = m.clone();
        let mut diagram_default = compute_default(&mut by_default, &ReductionOptions::default());
        let mut diagram_twist = compute::<_, TwistReducer>(&mut by_twist, &ReductionOptions::default());
        diagram_default.pairs.sort();
        diagram_twist.pairs.sort();
        assert_eq!(diagram_default.pairs, diagram_twist.pairs);
    }
}
