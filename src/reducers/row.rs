use log::debug;

use super::Reducer;
use crate::columns::Column;
use crate::matrix::BoundaryMatrix;
use crate::options::ReductionOptions;

/// Dual formulation of standard reduction: the same left-to-right sweep and
/// elimination rule, but the low-owner table is a row-indexed `Vec<Option<usize>>`
/// (sized by matrix height) rather than a hash map.
///
/// The elimination order and rule are identical to [`super::StandardReducer`];
/// only the auxiliary structure rows are tracked in changes, to a direct
/// array indexed by row in place of a hash map. The result is guaranteed
/// identical to `standard` by construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowReducer;

impl<C: Column> Reducer<C> for RowReducer {
    fn reduce(matrix: &mut BoundaryMatrix<C>, _options: &ReductionOptions) {
        let n = matrix.num_cols();
        debug!("row: reducing {n} columns with a row-indexed pivot table");
        let mut low_owner: Vec<Option<usize>> = vec![None; n];
        for j in 0..n {
            loop {
                let Some(low) = matrix.max_index(j) else { break };
                let Some(i) = low_owner[low] else { break };
                matrix.add_to(i, j);
            }
            if let Some(low) = matrix.max_index(j) {
                low_owner[low] = Some(j);
            }
        }
        debug!("row: done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::test_scenarios::*;
    use crate::reducers::StandardReducer;

    #[test]
    fn matches_standard_on_triangle() {
        let mut a = triangle();
        let mut b = triangle();
        RowReducer::reduce(&mut a, &ReductionOptions::default());
        StandardReducer::reduce(&mut b, &ReductionOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn matches_standard_on_filled_tetrahedron() {
        let mut a = filled_tetrahedron();
        let mut b = filled_tetrahedron();
        RowReducer::reduce(&mut a, &ReductionOptions::default());
        StandardReducer::reduce(&mut b, &ReductionOptions::default());
        assert_eq!(a, b);
    }
}
