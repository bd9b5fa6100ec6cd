//! Anti-transpose transform: reverses row and column order so a cohomology
//! computation over the dual complex can be read back as a homology
//! computation over the original.

use log::trace;

use crate::columns::Column;
use crate::diagram::PersistencePairs;
use crate::matrix::BoundaryMatrix;

/// Replaces `matrix` with its anti-transpose: a nonzero at `(N-1-c, N-1-r)`
/// for every nonzero `(r, c)` of the input, and `dim'(i) = D - dim(N-1-i)`.
///
/// Assumes `matrix` is square (`N` columns over `N` possible rows), as all
/// boundary matrices in this crate are.
pub fn dualize<C: Column>(matrix: &BoundaryMatrix<C>) -> BoundaryMatrix<C> {
    let n = matrix.cols().len();
    let max_dim = matrix.cols().iter().map(|c| c.dimension()).max().unwrap_or(0);
    trace!("dualize: anti-transposing {n} columns, max_dim={max_dim}");

    let mut new_cols: Vec<C> = matrix
        .cols()
        .iter()
        .rev()
        .map(|col| C::new_with_dimension(max_dim - col.dimension()))
        .collect();

    for (j, col) in matrix.cols().iter().enumerate() {
        for i in col.entries() {
            new_cols[n - 1 - i].add_entry(n - 1 - j);
        }
    }

    BoundaryMatrix::from_cols(new_cols)
}

/// Re-indexes a persistence-pairs collection produced from a dualized matrix
/// back into the original index space: `(b, d) -> (N-1-d, N-1-b)`.
pub fn dualize_pairs(pairs: PersistencePairs, n: usize) -> PersistencePairs {
    pairs
        .into_vec()
        .into_iter()
        .map(|(b, d)| (n - 1 - d, n - 1 - b))
        .collect()
}
