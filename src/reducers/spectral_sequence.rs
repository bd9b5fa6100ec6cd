use log::{debug, trace};
use rayon::prelude::*;

use super::{decreasing_dimension_order, local_sweep, sweep_reduce, Reducer};
use crate::columns::Column;
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;

/// Page/window-based parallel reduction.
///
/// The literal spectral-sequence page construction lets column `j` on page
/// `p` eliminate against the window `[j-(p+1)*step, j-p*step)`, widening the
/// window every page until it converges at `ceil(N/step)` pages. Page 0 is
/// disjoint (each block of `step` columns only ever looks inside itself) and
/// is run in parallel exactly like [`super::ChunkReducer`]'s local phase.
/// Later pages' windows overlap neighboring blocks, which this
/// implementation resolves with a single confluent global sweep rather than
/// simulating each page explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpectralSequenceReducer;

impl<C: Column + Send> Reducer<C> for SpectralSequenceReducer {
    fn reduce(matrix: &mut BoundaryMatrix<C>, options: &ReductionOptions) {
        let n = matrix.num_cols();
        let step = options.effective_step(n);
        debug!("spectral_sequence: reducing {n} columns, step={step}, pages={}", n.div_ceil(step.max(1)));

        options.with_pool(|| {
            matrix.cols_mut().par_chunks_mut(step).for_each(|block| {
                trace!("spectral_sequence: page 0 block of {} columns", block.len());
                local_sweep(block);
            });
        });

        matrix.sync();
        trace!("spectral_sequence: confluent sweep over remaining pages");
        let order = decreasing_dimension_order(matrix);
        sweep_reduce(matrix, &order, true);
        debug!("spectral_sequence: done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::test_scenarios::*;
    use crate::reducers::TwistReducer;

    #[test]
    fn matches_twist_on_triangle() {
        let mut a = triangle();
        let mut b = triangle();
        let options = ReductionOptions {
            step: Some(2),
            ..Default::default()
        };
        SpectralSequenceReducer::reduce(&mut a, &options);
        TwistReducer::reduce(&mut b, &ReductionOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn matches_twist_on_filled_tetrahedron() {
        let mut a = filled_tetrahedron();
        let mut b = filled_tetrahedron();
        let options = ReductionOptions {
            step: Some(3),
            ..Default::default()
        };
        SpectralSequenceReducer::reduce(&mut a, &options);
        TwistReducer::reduce(&mut b, &ReductionOptions::default());
        assert_eq!(a, b);
    }
}
