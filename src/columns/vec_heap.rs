use std::collections::BinaryHeap;

use super::Column;

/// A column represented by a max-heap of row indices with lazy duplicates
/// ("vector-of-heaps").
///
/// `add_col` is a cheap push of the other column's entries; cancelling pairs
/// (GF(2) addition of two equal entries) is deferred until [`Column::finalize`]
/// drains them, or until a [`Column::pivot`]/[`Column::entries`] call forces a
/// one-off scan of the accumulated multiset.
///
/// To construct call [`VecHeapColumn::from`] or use [`VecHeapColumn::new_with_dimension`]
/// and [`VecHeapColumn::add_entries`].
#[derive(Debug, Default, Clone)]
pub struct VecHeapColumn {
    heap: BinaryHeap<usize>,
    dimension: usize,
}

impl PartialEq for VecHeapColumn {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && canonical(&self.heap) == canonical(&other.heap)
    }
}

/// Cancels adjacent equal entries (GF(2) addition), returning the increasing
/// surviving sequence. Shared by `pivot`/`entries` (read-only scan) and
/// `finalize` (which also writes the result back).
fn canonical(heap: &BinaryHeap<usize>) -> Vec<usize> {
    let mut sorted = heap.clone().into_sorted_vec(); // ascending
    let mut kept = Vec::with_capacity(sorted.len());
    while let Some(top) = sorted.pop() {
        if sorted.last() == Some(&top) {
            sorted.pop();
            continue;
        }
        kept.push(top);
    }
    kept.reverse(); // increasing order
    kept
}

impl Column for VecHeapColumn {
    fn pivot(&self) -> Option<usize> {
        canonical(&self.heap).last().copied()
    }

    fn add_col(&mut self, other: &Self) {
        self.heap.extend(other.heap.iter().copied());
    }

    fn add_entry(&mut self, entry: usize) {
        self.heap.push(entry);
    }

    fn has_entry(&self, entry: &usize) -> bool {
        canonical(&self.heap).binary_search(entry).is_ok()
    }

    type EntriesIter<'a> = std::vec::IntoIter<usize>;

    fn entries<'a>(&'a self) -> Self::EntriesIter<'a> {
        canonical(&self.heap).into_iter()
    }

    type EntriesRepr = Vec<usize>;

    fn set_entries(&mut self, entries: Self::EntriesRepr) {
        self.heap = BinaryHeap::from(entries);
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    fn finalize(&mut self) {
        let kept = canonical(&self.heap);
        self.heap = BinaryHeap::from(kept);
    }

    fn new_with_dimension(dimension: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            dimension,
        }
    }
}

impl From<(usize, Vec<usize>)> for VecHeapColumn {
    fn from((dimension, boundary): (usize, Vec<usize>)) -> Self {
        Self {
            heap: BinaryHeap::from(boundary),
            dimension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_col_cancels_lazily() {
        let mut a = VecHeapColumn::from((1, vec![1, 2, 3]));
        let b = VecHeapColumn::from((1, vec![2, 3, 4]));
        a.add_col(&b);
        assert_eq!(a.pivot(), Some(4));
        a.finalize();
        let entries: Vec<_> = a.entries().collect();
        assert_eq!(entries, vec![1, 4]);
    }

    #[test]
    fn triple_duplicate_survives_once() {
        let mut a = VecHeapColumn::from((0, vec![5]));
        a.add_entry(5);
        a.add_entry(5);
        assert_eq!(a.pivot(), Some(5));
    }
}
