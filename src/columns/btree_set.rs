use std::collections::BTreeSet;

use super::Column;

/// A column represented by a balanced set of non-zero indices ("vector-of-sets").
///
/// Pointwise operations (`has_entry`, `add_entry`) are the fastest of any
/// representation in this crate, at the cost of heavier per-node constants
/// than [`super::VecColumn`]'s flat array.
///
/// To construct call [`BTreeSetColumn::from`] or use [`BTreeSetColumn::new_with_dimension`]
/// and [`BTreeSetColumn::add_entries`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BTreeSetColumn {
    boundary: BTreeSet<usize>,
    dimension: usize,
}

impl Column for BTreeSetColumn {
    fn pivot(&self) -> Option<usize> {
        self.boundary.last().copied()
    }

    fn add_col(&mut self, other: &Self) {
        for entry in other.boundary.iter() {
            self.add_entry(*entry);
        }
    }

    fn add_entry(&mut self, entry: usize) {
        if !self.boundary.remove(&entry) {
            self.boundary.insert(entry);
        }
    }

    fn has_entry(&self, entry: &usize) -> bool {
        self.boundary.contains(entry)
    }

    type EntriesIter<'a> = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn entries<'a>(&'a self) -> Self::EntriesIter<'a> {
        self.boundary.iter().copied()
    }

    type EntriesRepr = Vec<usize>;

    fn set_entries(&mut self, entries: Self::EntriesRepr) {
        self.boundary = entries.into_iter().collect();
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    fn is_cycle(&self) -> bool {
        self.boundary.is_empty()
    }

    fn new_with_dimension(dimension: usize) -> Self {
        Self {
            boundary: BTreeSet::new(),
            dimension,
        }
    }
}

impl From<(usize, Vec<usize>)> for BTreeSetColumn {
    fn from((dimension, boundary): (usize, Vec<usize>)) -> Self {
        Self {
            boundary: boundary.into_iter().collect(),
            dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_col_cancels_shared_entries() {
        let mut a = BTreeSetColumn::from((1, vec![1, 2, 3]));
        let b = BTreeSetColumn::from((1, vec![2, 3, 4]));
        a.add_col(&b);
        let entries: Vec<_> = a.entries().collect();
        assert_eq!(entries, vec![1, 4]);
        assert_eq!(a.pivot(), Some(4));
    }

    #[test]
    fn empty_column_has_no_pivot() {
        let col = BTreeSetColumn::new_with_dimension(0);
        assert_eq!(col.pivot(), None);
        assert!(col.is_cycle());
    }
}
