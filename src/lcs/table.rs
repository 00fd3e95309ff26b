// Dense LCS length table.
//
// `(rows) x (cols)` cells stored row-major in one flat `Vec<u32>`:
// cell `(i, j)` lives at `i * cols + j`. Row 0 and column 0 are the
// empty-prefix boundary and stay zero.

use crate::error::{Error, Result};

/// Default upper bound on table cells (64 Mi cells, 256 MiB of `u32`).
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 1 << 26;

/// Check that a table for `old_len` x `new_len` inputs fits under `limit`.
///
/// Returns the cell count. Hosts can call this to reject oversized inputs
/// before invoking the aligner.
pub fn check_table_size(old_len: usize, new_len: usize, limit: u64) -> Result<usize> {
    let rows = old_len.saturating_add(1);
    let cols = new_len.saturating_add(1);
    let exhausted = || Error::ResourceExhaustion { rows, cols, limit };

    let cells = rows.checked_mul(cols).ok_or_else(exhausted)?;
    if cells as u64 > limit {
        return Err(exhausted());
    }
    // Cell values are bounded by min(old_len, new_len).
    if old_len.min(new_len) > u32::MAX as usize {
        return Err(exhausted());
    }
    Ok(cells)
}

/// Flat `(|old|+1) x (|new|+1)` table of LCS prefix lengths.
pub struct LcsTable {
    cells: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl LcsTable {
    /// Allocate a zeroed table, failing with `ResourceExhaustion` when the
    /// size is over `limit` or the allocator refuses the reservation.
    pub fn try_new(old_len: usize, new_len: usize, limit: u64) -> Result<Self> {
        let n = check_table_size(old_len, new_len, limit)?;
        let rows = old_len + 1;
        let cols = new_len + 1;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n)
            .map_err(|_| Error::ResourceExhaustion { rows, cols, limit })?;
        cells.resize(n, 0);

        Ok(Self { cells, rows, cols })
    }

    /// Fill every cell from the standard recurrence over byte equality.
    pub fn fill(&mut self, old: &[u8], new: &[u8]) {
        debug_assert_eq!(old.len() + 1, self.rows);
        debug_assert_eq!(new.len() + 1, self.cols);

        let cols = self.cols;
        for i in 1..self.rows {
            let row = i * cols;
            let prev_row = row - cols;
            let o = old[i - 1];
            for j in 1..cols {
                self.cells[row + j] = if o == new[j - 1] {
                    self.cells[prev_row + j - 1] + 1
                } else {
                    self.cells[prev_row + j].max(self.cells[row + j - 1])
                };
            }
        }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of the full inputs (bottom-right cell).
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}
