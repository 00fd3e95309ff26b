// Diff engine: the two top-level operations.
//
// Provides in-memory APIs that orchestrate:
//   - LCS alignment (lcs module) of old against new
//   - record construction and serialization (delta + format modules)
//   - record parsing and application against old to rebuild new

use log::debug;

use crate::delta::{DiffApplier, DiffEncoder};
use crate::error::{Error, Result};
use crate::lcs::DEFAULT_MAX_TABLE_CELLS;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for producing a diff.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Upper bound on `(|old|+1) * (|new|+1)` alignment table cells.
    pub max_table_cells: u64,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

/// Configuration for applying a diff.
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    /// Copy the old bytes remaining after the last record. When `false`
    /// the output ends right after the last record's payload.
    pub copy_tail: bool,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self { copy_tail: true }
    }
}

// ---------------------------------------------------------------------------
// Produce
// ---------------------------------------------------------------------------

/// Produce the diff stream that turns `old` into `new`.
///
/// Both inputs must be non-empty.
pub fn produce_diff(old: &[u8], new: &[u8]) -> Result<Vec<u8>> {
    produce_diff_with_options(old, new, &DiffOptions::default())
}

/// Produce with custom options.
pub fn produce_diff_with_options(old: &[u8], new: &[u8], opts: &DiffOptions) -> Result<Vec<u8>> {
    let mut encoder = DiffEncoder::new(Vec::new(), opts.max_table_cells);
    let summary = encoder.encode(old, new)?;
    let diff = encoder.finish()?;
    debug!(
        "produce_diff: old={} new={} common={} records={} diff={}",
        old.len(),
        new.len(),
        summary.common,
        summary.records,
        diff.len()
    );
    Ok(diff)
}

/// Produce diffs for independent `(old, new)` pairs in parallel.
///
/// Results are returned in input order; one failing pair does not affect
/// the others.
#[cfg(feature = "parallel")]
pub fn produce_diff_batch(pairs: &[(&[u8], &[u8])], opts: &DiffOptions) -> Vec<Result<Vec<u8>>> {
    pairs
        .par_iter()
        .map(|(old, new)| produce_diff_with_options(old, new, opts))
        .collect()
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

/// Rebuild the new sequence from `old` and a diff stream.
///
/// On error nothing is returned; partial output is discarded.
pub fn apply_diff(old: &[u8], diff: &[u8]) -> Result<Vec<u8>> {
    apply_diff_with_options(old, diff, &RestoreOptions::default())
}

/// Apply with custom options.
pub fn apply_diff_with_options(old: &[u8], diff: &[u8], opts: &RestoreOptions) -> Result<Vec<u8>> {
    if old.is_empty() {
        return Err(Error::InvalidInput("old sequence is empty".into()));
    }

    let mut out = Vec::with_capacity(old.len());
    let stats = DiffApplier::new(old, opts.copy_tail).restore_to(diff, &mut out)?;
    debug!(
        "apply_diff: old={} diff={} records={} output={}",
        old.len(),
        diff.len(),
        stats.records,
        out.len()
    );
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
