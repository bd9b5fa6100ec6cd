//! Matrix and pair-list file formats. Deliberately minimal: this is not where
//! engineering effort goes, so it's a thin hand-rolled reader/writer over
//! `std::io` rather than a `serde` derive; the wire layout (ASCII line
//! format, fixed-width binary layout) is specified exactly enough that a
//! derive would fight the format more than it would help.

mod ascii;
mod binary;

pub use ascii::{load_matrix_ascii, load_pairs_ascii, save_matrix_ascii, save_pairs_ascii};
pub use binary::{load_matrix_binary, load_pairs_binary, save_matrix_binary, save_pairs_binary};
