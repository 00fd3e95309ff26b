// File-level helpers for diff/restore.
//
// Provides `diff_file()` and `restore_file()` convenience functions that
// load inputs into `ByteSequence`s and write results with buffered I/O.
// Optionally computes SHA-256 digests (feature-gated behind `file-io`).

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
#[cfg(feature = "file-io")]
use sha2::Digest;

use crate::buffer::ByteSequence;
use crate::delta::{DiffApplier, DiffEncoder};
use crate::engine::{DiffOptions, RestoreOptions};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `diff_file()`.
#[derive(Debug, Clone)]
pub struct DiffStats {
    /// Old file size in bytes.
    pub old_size: u64,
    /// New file size in bytes.
    pub new_size: u64,
    /// Diff output size in bytes.
    pub diff_size: u64,
    /// Length of the alignment.
    pub common: u64,
    /// Number of records written.
    pub records: u64,
    /// SHA-256 of the old file (if `file-io` feature is enabled).
    pub old_sha256: Option<[u8; 32]>,
    /// SHA-256 of the new file (if `file-io` feature is enabled).
    pub new_sha256: Option<[u8; 32]>,
}

/// Statistics returned by `restore_file()`.
#[derive(Debug, Clone)]
pub struct RestoreStats {
    /// Old file size in bytes.
    pub old_size: u64,
    /// Diff file size in bytes.
    pub diff_size: u64,
    /// Restored output size in bytes.
    pub output_size: u64,
    /// Number of records applied.
    pub records: u64,
    /// SHA-256 of the restored output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a whole file into a `ByteSequence`.
pub fn load_sequence(path: &Path) -> Result<ByteSequence> {
    let bytes = std::fs::read(path)?;
    debug!("loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(ByteSequence::new(bytes))
}

fn require_non_empty(seq: &ByteSequence, path: &Path) -> Result<()> {
    if seq.is_empty() {
        return Err(Error::InvalidInput(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(())
}

#[cfg(feature = "file-io")]
fn sha256(data: &[u8]) -> Option<[u8; 32]> {
    Some(sha2::Sha256::digest(data).into())
}

#[cfg(not(feature = "file-io"))]
fn sha256(_data: &[u8]) -> Option<[u8; 32]> {
    None
}

// ---------------------------------------------------------------------------
// diff_file
// ---------------------------------------------------------------------------

/// Diff `old_path` against `new_path`, writing the diff stream to `diff_path`.
///
/// Both inputs are read fully into memory. The diff file is only created
/// once alignment has succeeded.
pub fn diff_file(
    old_path: &Path,
    new_path: &Path,
    diff_path: &Path,
    opts: &DiffOptions,
) -> Result<DiffStats> {
    let old = load_sequence(old_path)?;
    let new = load_sequence(new_path)?;
    require_non_empty(&old, old_path)?;
    require_non_empty(&new, new_path)?;

    let mut encoder = DiffEncoder::new(Vec::new(), opts.max_table_cells);
    let summary = encoder.encode(old.as_slice(), new.as_slice())?;
    let diff = encoder.finish()?;

    let mut writer = BufWriter::with_capacity(BUF_SIZE, File::create(diff_path)?);
    writer.write_all(&diff)?;
    writer.flush()?;

    Ok(DiffStats {
        old_size: old.len() as u64,
        new_size: new.len() as u64,
        diff_size: diff.len() as u64,
        common: summary.common as u64,
        records: summary.records as u64,
        old_sha256: sha256(old.as_slice()),
        new_sha256: sha256(new.as_slice()),
    })
}

// ---------------------------------------------------------------------------
// restore_file
// ---------------------------------------------------------------------------

/// Rebuild a file from `old_path` and the diff at `diff_path`, writing it
/// to `output_path`.
///
/// The diff is streamed through a `BufReader`. Output is assembled in
/// memory and only written once every record applied cleanly.
pub fn restore_file(
    old_path: &Path,
    diff_path: &Path,
    output_path: &Path,
    opts: &RestoreOptions,
) -> Result<RestoreStats> {
    let old = load_sequence(old_path)?;
    require_non_empty(&old, old_path)?;

    let diff_file = File::open(diff_path)?;
    let diff_size = diff_file.metadata()?.len();
    let diff_reader = BufReader::with_capacity(BUF_SIZE, diff_file);

    let mut output = Vec::with_capacity(old.len());
    let stats = DiffApplier::new(old.as_slice(), opts.copy_tail)
        .restore_to(diff_reader, &mut output)?;

    let mut writer = BufWriter::with_capacity(BUF_SIZE, File::create(output_path)?);
    writer.write_all(&output)?;
    writer.flush()?;

    Ok(RestoreStats {
        old_size: old.len() as u64,
        diff_size,
        output_size: output.len() as u64,
        records: stats.records,
        output_sha256: sha256(&output),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
