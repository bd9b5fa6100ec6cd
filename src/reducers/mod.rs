//! Matrix-reduction algorithms. Each reducer mutates a [`BoundaryMatrix`] in
//! place into reduced form; the trait carries no state of its own, keeping
//! the algorithm separate from the matrix it operates on.

mod chunk;
mod row;
mod spectral_sequence;
mod standard;
mod twist;

pub use chunk::ChunkReducer;
pub use row::RowReducer;
pub use spectral_sequence::SpectralSequenceReducer;
pub use standard::StandardReducer;
pub use twist::TwistReducer;

use hashbrown::HashMap;

use crate::columns::Column;
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;

/// A matrix-reduction algorithm. `reduce` is the only required method;
/// implementors mutate `matrix` until every nonempty column's low is unique.
pub trait Reducer<C: Column> {
    fn reduce(matrix: &mut BoundaryMatrix<C>, options: &ReductionOptions);
}

/// Shared left-to-right column-addition sweep, parameterized by processing
/// order and whether a column should be cleared immediately once it becomes
/// someone's low (the "twist" optimization). [`StandardReducer`] calls this
/// with the identity order and no clearing; [`TwistReducer`] with a
/// decreasing-dimension order and clearing; the chunk reducer's confluent
/// phase reuses it with clearing to land on the same final matrix as
/// sequential twist.
pub(crate) fn sweep_reduce<C: Column>(matrix: &mut BoundaryMatrix<C>, order: &[usize], clear_pivots: bool) {
    let mut low_inverse: HashMap<usize, usize> = HashMap::new();
    for &j in order {
        loop {
            let Some(low) = matrix.max_index(j) else { break };
            let Some(&i) = low_inverse.get(&low) else { break };
            matrix.add_to(i, j);
        }
        if let Some(low) = matrix.max_index(j) {
            low_inverse.insert(low, j);
            if clear_pivots {
                matrix.set_col(low, C::EntriesRepr::default());
            }
        }
    }
}

/// Decreasing-dimension, index-ascending-within-dimension processing order,
/// used by [`TwistReducer`] and by [`ChunkReducer`]'s confluent phase.
pub(crate) fn decreasing_dimension_order<C: Column>(matrix: &BoundaryMatrix<C>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..matrix.num_cols()).collect();
    order.sort_by(|&a, &b| matrix.dim(b).cmp(&matrix.dim(a)).then(a.cmp(&b)));
    order
}

/// Reduces a contiguous slice of columns in isolation: a fresh, purely local
/// low-owner map, no clearing (clearing requires indexing a column by row
/// value, which only makes sense against the whole matrix). Used by the
/// parallel reducers' disjoint first phase, where each worker only ever
/// touches its own slice.
pub(crate) fn local_sweep<C: Column>(cols: &mut [C]) {
    let mut low_inverse: HashMap<usize, usize> = HashMap::new();
    for j in 0..cols.len() {
        loop {
            cols[j].finalize();
            let Some(low) = cols[j].pivot() else { break };
            let Some(&i) = low_inverse.get(&low) else { break };
            add_within(cols, i, j);
        }
        cols[j].finalize();
        if let Some(low) = cols[j].pivot() {
            low_inverse.insert(low, j);
        }
    }
}

fn add_within<C: Column>(cols: &mut [C], source: usize, target: usize) {
    debug_assert_ne!(source, target);
    if source < target {
        let (left, right) = cols.split_at_mut(target);
        right[0].add_col(&left[source]);
    } else {
        let (left, right) = cols.split_at_mut(source);
        left[target].add_col(&right[0]);
    }
}
