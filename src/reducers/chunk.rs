use log::{debug, trace};
use rayon::prelude::*;

use super::{decreasing_dimension_order, local_sweep, sweep_reduce, Reducer};
use crate::columns::Column;
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;

/// Parallel reduction by column chunks, sized roughly `sqrt(N)` by default.
///
/// Phase 1 reduces each chunk against itself in parallel. Phase 2 runs a
/// confluent global sweep (in decreasing-dimension order, clearing as it
/// goes) over the whole, now partially reduced, matrix, which also clears
/// any columns killed during phase 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkReducer;

impl<C: Column + Send> Reducer<C> for ChunkReducer {
    fn reduce(matrix: &mut BoundaryMatrix<C>, options: &ReductionOptions) {
        let n = matrix.num_cols();
        let chunk_size = options.effective_chunk_size(n);
        debug!("chunk: reducing {n} columns in chunks of {chunk_size}");

        options.with_pool(|| {
            matrix.cols_mut().par_chunks_mut(chunk_size).for_each(|chunk| {
                trace!("chunk: local phase over {} columns", chunk.len());
                local_sweep(chunk);
            });
        });

        matrix.sync();
        trace!("chunk: confluent global phase");
        let order = decreasing_dimension_order(matrix);
        sweep_reduce(matrix, &order, true);
        debug!("chunk: done");
    }
}
