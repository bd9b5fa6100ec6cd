use hashbrown::HashMap;

use super::Column;

/// A column represented by an active sparse bag of pushed entries plus a
/// pivot cached separately from the body ("sparse-pivot-column").
///
/// `add_col` just appends the other column's bag (amortized O(|b|)); the bag
/// may then contain cancelling duplicate pairs. `pivot` refreshes the cache
/// from the bag only when it has gone stale, so repeated pivot queries
/// between mutations are O(1).
///
/// To construct call [`SparsePivotColumn::from`] or use
/// [`SparsePivotColumn::new_with_dimension`] and [`SparsePivotColumn::add_entries`].
#[derive(Debug, Default, Clone)]
pub struct SparsePivotColumn {
    bag: Vec<usize>,
    pivot: Option<usize>,
    dirty: bool,
    dimension: usize,
}

impl PartialEq for SparsePivotColumn {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && canonicalize(&self.bag) == canonicalize(&other.bag)
    }
}

fn canonicalize(bag: &[usize]) -> Vec<usize> {
    let mut parity: HashMap<usize, bool> = HashMap::new();
    for &entry in bag {
        let flag = parity.entry(entry).or_insert(false);
        *flag = !*flag;
    }
    let mut kept: Vec<usize> = parity
        .into_iter()
        .filter_map(|(row, present)| present.then_some(row))
        .collect();
    kept.sort_unstable();
    kept
}

impl SparsePivotColumn {
    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        let kept = canonicalize(&self.bag);
        self.pivot = kept.last().copied();
        self.bag = kept;
        self.dirty = false;
    }
}

impl Column for SparsePivotColumn {
    fn pivot(&self) -> Option<usize> {
        if self.dirty {
            canonicalize(&self.bag).last().copied()
        } else {
            self.pivot
        }
    }

    fn add_col(&mut self, other: &Self) {
        self.bag.extend_from_slice(&other.bag);
        self.dirty = true;
    }

    fn add_entry(&mut self, entry: usize) {
        self.bag.push(entry);
        self.dirty = true;
    }

    fn has_entry(&self, entry: &usize) -> bool {
        canonicalize(&self.bag).binary_search(entry).is_ok()
    }

    type EntriesIter<'a> = std::vec::IntoIter<usize>;

    fn entries<'a>(&'a self) -> Self::EntriesIter<'a> {
        canonicalize(&self.bag).into_iter()
    }

    type EntriesRepr = Vec<usize>;

    fn set_entries(&mut self, entries: Self::EntriesRepr) {
        self.bag = entries;
        self.dirty = true;
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    fn finalize(&mut self) {
        self.refresh();
    }

    fn new_with_dimension(dimension: usize) -> Self {
        Self {
            bag: Vec::new(),
            pivot: None,
            dirty: false,
            dimension,
        }
    }
}

impl From<(usize, Vec<usize>)> for SparsePivotColumn {
    fn from((dimension, boundary): (usize, Vec<usize>)) -> Self {
        let mut col = Self::new_with_dimension(dimension);
        col.bag = boundary;
        col.dirty = true;
        col.refresh();
        col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_caches_pivot() {
        let mut a = SparsePivotColumn::from((1, vec![1, 2, 3]));
        let b = SparsePivotColumn::from((1, vec![2, 3, 4]));
        a.add_col(&b);
        assert_eq!(a.pivot(), Some(4));
        a.finalize();
        assert!(!a.dirty);
        assert_eq!(a.pivot, Some(4));
        let entries: Vec<_> = a.entries().collect();
        assert_eq!(entries, vec![1, 4]);
    }
}
