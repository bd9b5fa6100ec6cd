use std::collections::BinaryHeap;

use super::Column;

/// A column represented by a heap body plus an explicit pivot, updated
/// eagerly on every mutation ("heap-pivot-column").
///
/// Unlike [`super::VecHeapColumn`], which defers cancellation to `finalize`,
/// this representation keeps its pivot correct after every `add_col`/`add_entry`
/// by folding the current pivot back into the heap before resettling it, so
/// `pivot()` is always an O(1) field read.
///
/// To construct call [`HeapPivotColumn::from`] or use
/// [`HeapPivotColumn::new_with_dimension`] and [`HeapPivotColumn::add_entries`].
#[derive(Debug, Default, Clone)]
pub struct HeapPivotColumn {
    body: BinaryHeap<usize>, // entries known not to be the current pivot; may hold lazy dup pairs
    pivot: Option<usize>,
    dimension: usize,
}

impl PartialEq for HeapPivotColumn {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && canonical_entries(self) == canonical_entries(other)
    }
}

fn canonical_entries(col: &HeapPivotColumn) -> Vec<usize> {
    let mut sorted = col.body.clone().into_sorted_vec();
    let mut kept = Vec::with_capacity(sorted.len() + 1);
    while let Some(top) = sorted.pop() {
        if sorted.last() == Some(&top) {
            sorted.pop();
            continue;
        }
        kept.push(top);
    }
    if let Some(p) = col.pivot {
        kept.push(p);
    }
    kept.sort_unstable();
    kept
}

impl HeapPivotColumn {
    /// Resettle the pivot after folding new entries (and the old pivot) back
    /// into `body`: pop-and-cancel adjacent equal pairs from the top of the
    /// heap until a genuine survivor surfaces.
    fn refresh_pivot(&mut self) {
        loop {
            let Some(top) = self.body.pop() else {
                self.pivot = None;
                return;
            };
            if self.body.peek() == Some(&top) {
                self.body.pop();
                continue;
            }
            self.pivot = Some(top);
            return;
        }
    }
}

impl Column for HeapPivotColumn {
    fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    fn add_col(&mut self, other: &Self) {
        if let Some(p) = self.pivot.take() {
            self.body.push(p);
        }
        self.body.extend(other.body.iter().copied());
        if let Some(p) = other.pivot {
            self.body.push(p);
        }
        self.refresh_pivot();
    }

    fn add_entry(&mut self, entry: usize) {
        if let Some(p) = self.pivot.take() {
            self.body.push(p);
        }
        self.body.push(entry);
        self.refresh_pivot();
    }

    fn has_entry(&self, entry: &usize) -> bool {
        canonical_entries(self).binary_search(entry).is_ok()
    }

    type EntriesIter<'a> = std::vec::IntoIter<usize>;

    fn entries<'a>(&'a self) -> Self::EntriesIter<'a> {
        canonical_entries(self).into_iter()
    }

    type EntriesRepr = Vec<usize>;

    fn set_entries(&mut self, entries: Self::EntriesRepr) {
        self.body = BinaryHeap::from(entries);
        self.pivot = None;
        self.refresh_pivot();
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    fn finalize(&mut self) {
        // The pivot is already correct; drain cancelling pairs below it so
        // `entries()` does not need to rescan a dirty body.
        let kept = canonical_entries(self);
        self.pivot = kept.last().copied();
        self.body = BinaryHeap::from(
            kept.into_iter()
                .rev()
                .skip(1)
                .collect::<Vec<_>>(),
        );
    }

    fn new_with_dimension(dimension: usize) -> Self {
        Self {
            body: BinaryHeap::new(),
            pivot: None,
            dimension,
        }
    }
}

impl From<(usize, Vec<usize>)> for HeapPivotColumn {
    fn from((dimension, boundary): (usize, Vec<usize>)) -> Self {
        let mut col = Self::new_with_dimension(dimension);
        col.set_entries(boundary);
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_updated_eagerly() {
        let mut a = HeapPivotColumn::from((1, vec![1, 2, 3]));
        let b = HeapPivotColumn::from((1, vec![2, 3, 4]));
        a.add_col(&b);
        assert_eq!(a.pivot(), Some(4));
        let entries: Vec<_> = a.entries().collect();
        assert_eq!(entries, vec![1, 4]);
    }

    #[test]
    fn empty_after_full_cancellation() {
        let mut a = HeapPivotColumn::from((0, vec![1, 2]));
        let b = HeapPivotColumn::from((0, vec![1, 2]));
        a.add_col(&b);
        assert_eq!(a.pivot(), None);
        assert!(a.is_cycle());
    }
}
