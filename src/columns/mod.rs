//! Representations of columns of a Z_2 matrix, complying to a common interface.
//!
//! Every representation below satisfies the same contract (read, overwrite,
//! symmetric-difference add, "largest index" query) but differs in the
//! storage it uses and therefore in the cost profile of each operation. See
//! the module-level docs of each submodule for the tradeoff it makes.

mod bit_set;
mod bit_tree;
mod btree_set;
mod heap_pivot;
mod sparse_pivot;
mod vec;
mod vec_heap;

pub use self::bit_set::BitSetColumn;
pub use self::bit_tree::BitTreePivotColumn;
pub use self::btree_set::BTreeSetColumn;
pub use self::heap_pivot::HeapPivotColumn;
pub use self::sparse_pivot::SparsePivotColumn;
pub use self::vec::VecColumn;
pub use self::vec_heap::VecHeapColumn;

/// Structs implementing `Column` represent columns of a `usize`-indexed matrix,
/// over the finite field F_2.
///
/// Note the requirement to implement `From<(usize, Self::EntriesRepr)>`.
/// The `usize` is the dimension and `Self::EntriesRepr` is the entries in the column.
pub trait Column: Sync + Clone + Send + PartialEq + From<(usize, Self::EntriesRepr)> {
    /// Returns the index of the highest non-zero entry ("low"), or `None` if the column is empty.
    fn pivot(&self) -> Option<usize>;
    /// Adds one copy of `other` into `self`
    fn add_col(&mut self, other: &Self);
    /// Should be equivalent to `self.add_col(e_entry)` where `e_entry` is the column
    /// with all zeros except a 1 in index `entry`.
    fn add_entry(&mut self, entry: usize);
    /// Return whether or not entry appears with value 1 in the column
    fn has_entry(&self, entry: &usize) -> bool;
    /// The output type of [`Self::entries`]
    type EntriesIter<'a>: Iterator<Item = usize>
    where
        Self: 'a;
    /// Returns the entries of the column, in strictly increasing order, once
    /// any deferred state has been finalized.
    fn entries<'a>(&'a self) -> Self::EntriesIter<'a>;
    /// A format that the user can provide the entries of the column in, in order to efficiently construct the column.
    /// The `Default` should correspond to the empty column
    type EntriesRepr: Default;
    /// Efficiently override the column, by providing entries in the internal format.
    fn set_entries(&mut self, entries: Self::EntriesRepr);
    /// Return the dimension of this column (assuming the matrix represents a chain complex boundary matrix)
    fn dimension(&self) -> usize;
    /// Change column to provided dimension
    fn set_dimension(&mut self, dimension: usize);

    /// Materialize any deferred state (e.g. drain lazily-cancelled duplicates
    /// in a heap-based representation) so that subsequent reads are canonical.
    /// A no-op for representations that are always canonical.
    fn finalize(&mut self) {}

    /// Returns whether or not the column is a cycle, i.e. has no entries.
    /// Provided implementation makes call to [`Self::pivot`].
    /// You may wish to provide a more efficient implementation
    fn is_cycle(&self) -> bool {
        self.pivot().is_none()
    }

    /// Returns whether or not the column is a boundary, i.e. is non-empty.
    /// Provided implementation negates [`Self::is_cycle`]
    fn is_boundary(&self) -> bool {
        !self.is_cycle()
    }

    /// Uses [`Self::add_entry`] to add elements from the iterator to the column
    fn add_entries<B: Iterator<Item = usize>>(&mut self, entries: B) {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    /// Init an empty column with the given dimension
    fn new_with_dimension(dimension: usize) -> Self {
        Self::from((dimension, Self::EntriesRepr::default()))
    }

    /// Removes all entries from the column
    fn clear_entries(&mut self) {
        self.set_entries(Self::EntriesRepr::default())
    }
}
