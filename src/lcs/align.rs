// LCS alignment: fill the table, then backtrack from the bottom-right cell.
//
// Backtracking rule, in order:
//   1. bytes equal          -> record (i-1, j-1), step diagonally
//   2. up cell strictly > left cell -> step up (consume old)
//   3. otherwise (ties too) -> step left (consume new)
// Rule 3 pins which of several equally long alignments is returned, so
// it must not change.

use log::debug;

use super::table::LcsTable;
use crate::error::{Error, Result};

/// One matched byte of the chosen alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommonElement {
    /// Position in the old sequence.
    pub old_pos: usize,
    /// Position in the new sequence.
    pub new_pos: usize,
}

impl CommonElement {
    pub const fn new(old_pos: usize, new_pos: usize) -> Self {
        Self { old_pos, new_pos }
    }
}

/// Compute the common elements of `old` and `new`, ascending in both
/// positions.
///
/// Both inputs must be non-empty. The table size is checked against
/// `max_cells` before anything is allocated.
pub fn align(old: &[u8], new: &[u8], max_cells: u64) -> Result<Vec<CommonElement>> {
    let table = build_table(old, new, max_cells)?;
    let common = backtrack(&table, old, new);
    debug!(
        "aligned {}x{} bytes: {} common elements",
        old.len(),
        new.len(),
        common.len()
    );
    Ok(common)
}

/// Length of the LCS of `old` and `new` (the table's final cell).
pub fn lcs_length(old: &[u8], new: &[u8], max_cells: u64) -> Result<usize> {
    Ok(build_table(old, new, max_cells)?.lcs_len() as usize)
}

fn build_table(old: &[u8], new: &[u8], max_cells: u64) -> Result<LcsTable> {
    if old.is_empty() {
        return Err(Error::InvalidInput("old sequence is empty".into()));
    }
    if new.is_empty() {
        return Err(Error::InvalidInput("new sequence is empty".into()));
    }

    let mut table = LcsTable::try_new(old.len(), new.len(), max_cells)?;
    table.fill(old, new);
    Ok(table)
}

fn backtrack(table: &LcsTable, old: &[u8], new: &[u8]) -> Vec<CommonElement> {
    let mut common = Vec::with_capacity(table.lcs_len() as usize);

    let (mut i, mut j) = (old.len(), new.len());
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            common.push(CommonElement::new(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) > table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // Discovered back to front.
    common.reverse();
    common
}
