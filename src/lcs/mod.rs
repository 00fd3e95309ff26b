// Longest-common-subsequence alignment over raw bytes.
//
// - `table`: flat dynamic-programming table and size limits
// - `align`: table fill, backtracking and the tie-break rule

pub mod align;
pub mod table;

pub use align::{CommonElement, align, lcs_length};
pub use table::{DEFAULT_MAX_TABLE_CELLS, LcsTable, check_table_size};
