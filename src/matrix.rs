//! The boundary matrix: a representation-agnostic wrapper around a vector of
//! columns plus per-column dimension.

use log::trace;

use crate::columns::Column;

/// A GF(2) boundary matrix over some column representation `C`.
///
/// Columns are mutated only through [`BoundaryMatrix::add_to`]; the matrix
/// never reorders or removes columns after construction.
#[derive(Debug, Clone)]
pub struct BoundaryMatrix<C> {
    cols: Vec<C>,
}

impl<C: Column> PartialEq for BoundaryMatrix<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cols == other.cols
    }
}

impl<C: Column> BoundaryMatrix<C> {
    /// Builds an empty matrix, sized for `num_cols` columns of dimension 0.
    pub fn init(num_cols: usize) -> Self {
        Self {
            cols: (0..num_cols).map(|_| C::new_with_dimension(0)).collect(),
        }
    }

    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    pub fn dim(&self, i: usize) -> usize {
        self.cols[i].dimension()
    }

    pub fn set_dim(&mut self, i: usize, d: usize) {
        self.cols[i].set_dimension(d);
    }

    /// Canonical increasing sequence of row indices for column `i`. Forces a
    /// finalize first, so no external `sync()` is required for single-threaded
    /// reads.
    pub fn get_col(&mut self, i: usize) -> Vec<usize> {
        self.cols[i].finalize();
        self.cols[i].entries().collect()
    }

    pub fn set_col(&mut self, i: usize, entries: C::EntriesRepr) {
        self.cols[i].clear_entries();
        self.cols[i].set_entries(entries);
    }

    pub fn is_empty(&mut self, i: usize) -> bool {
        self.cols[i].finalize();
        self.cols[i].is_cycle()
    }

    /// `low(i)`, or `None` if column `i` is empty.
    pub fn max_index(&mut self, i: usize) -> Option<usize> {
        self.cols[i].finalize();
        self.cols[i].pivot()
    }

    /// Replaces `target` with `target XOR source`, leaving `source` unchanged.
    pub fn add_to(&mut self, source: usize, target: usize) {
        debug_assert_ne!(source, target, "add_to called with source == target");
        let (lo, hi) = if source < target {
            (source, target)
        } else {
            (target, source)
        };
        let (left, right) = self.cols.split_at_mut(hi);
        let (src_ref, tgt_ref) = if source < target {
            (&left[lo], &mut right[0])
        } else {
            (&right[0], &mut left[lo])
        };
        tgt_ref.add_col(src_ref);
    }

    pub fn finalize(&mut self, i: usize) {
        self.cols[i].finalize();
    }

    /// Finalizes every column. Must be called before any multi-threaded read
    /// and after any multi-threaded write episode.
    pub fn sync(&mut self) {
        trace!("sync: finalizing {} columns", self.cols.len());
        for col in self.cols.iter_mut() {
            col.finalize();
        }
    }

    pub fn max_dim(&self) -> usize {
        self.cols.iter().map(|c| c.dimension()).max().unwrap_or(0)
    }

    /// Number of nonzero rows in column `i`.
    pub fn num_rows(&mut self, i: usize) -> usize {
        self.get_col(i).len()
    }

    pub fn max_col_entries(&mut self) -> usize {
        (0..self.num_cols()).map(|i| self.num_rows(i)).max().unwrap_or(0)
    }

    /// Maximum number of nonzero columns in any row, computed by transposing
    /// the matrix on the fly.
    pub fn max_row_entries(&mut self) -> usize {
        let mut row_counts: hashbrown::HashMap<usize, usize> = hashbrown::HashMap::new();
        for i in 0..self.num_cols() {
            for row in self.get_col(i) {
                *row_counts.entry(row).or_insert(0) += 1;
            }
        }
        row_counts.values().copied().max().unwrap_or(0)
    }

    pub fn num_entries(&mut self) -> usize {
        (0..self.num_cols()).map(|i| self.num_rows(i)).sum()
    }

    /// Raw column access for representations that need to build a fresh
    /// matrix without re-deriving it through the public interface (dualize).
    pub(crate) fn cols(&self) -> &[C] {
        &self.cols
    }

    /// Raw mutable column access, used by the parallel reducers to partition
    /// work with `rayon::par_chunks_mut` below the `add_to` borrow-checking
    /// layer.
    pub(crate) fn cols_mut(&mut self) -> &mut [C] {
        &mut self.cols
    }

    pub(crate) fn from_cols(cols: Vec<C>) -> Self {
        Self { cols }
    }
}

impl<C: Column> FromIterator<C> for BoundaryMatrix<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cols: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::VecColumn;

    fn triangle() -> BoundaryMatrix<VecColumn> {
        vec![
            (0, vec![]),
            (0, vec![]),
            (0, vec![]),
            (1, vec![0, 1]),
            (1, vec![1, 2]),
            (1, vec![0, 2]),
            (2, vec![3, 4, 5]),
        ]
        .into_iter()
        .map(VecColumn::from)
        .collect()
    }

    #[test]
    fn add_to_xors_columns() {
        let mut m = triangle();
        m.add_to(3, 5);
        assert_eq!(m.get_col(5), vec![1, 2]);
        assert_eq!(m.get_col(3), vec![0, 1]);
    }

    #[test]
    fn max_col_and_row_entries() {
        let mut m = triangle();
        assert_eq!(m.max_col_entries(), 3);
        assert_eq!(m.max_row_entries(), 2);
        assert_eq!(m.num_entries(), 2 + 2 + 2 + 3);
    }

    #[test]
    fn max_dim_reports_highest() {
        let m = triangle();
        assert_eq!(m.max_dim(), 2);
    }
}
