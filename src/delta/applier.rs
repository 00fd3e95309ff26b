// Diff applier: rebuilds the new sequence from old + records.
//
// A cursor walks the old sequence. For each record the unmodified span
// `old[cursor..anchor)` is copied, the payload is written, and the cursor
// jumps past the deleted span. Records must arrive in ascending anchor
// order and never reach back behind the cursor.

use std::io::{Read, Write};

use log::{debug, trace};

use crate::buffer::checked_slice;
use crate::error::{Error, Result};
use crate::format::{DiffRecord, RecordReader};

/// Totals for one restore.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Records applied, no-ops included.
    pub records: u64,
    /// Bytes written to the output.
    pub bytes_written: u64,
    /// Old bytes copied after the last record.
    pub tail_copied: u64,
}

/// Applies records against an old sequence, writing into a sink.
pub struct DiffApplier<'a> {
    old: &'a [u8],
    cursor: usize,
    copy_tail: bool,
    stats: ApplyStats,
}

impl<'a> DiffApplier<'a> {
    /// `copy_tail` controls whether `old[cursor..)` is written by `finish`.
    pub fn new(old: &'a [u8], copy_tail: bool) -> Self {
        Self {
            old,
            cursor: 0,
            copy_tail,
            stats: ApplyStats::default(),
        }
    }

    /// Current position in the old sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one record.
    pub fn apply_record<W: Write>(&mut self, record: &DiffRecord, out: &mut W) -> Result<()> {
        let index = self.stats.records;
        if record.anchor < self.cursor {
            return Err(Error::malformed(
                0,
                format!(
                    "record #{index} anchors at {} behind cursor {}",
                    record.anchor, self.cursor
                ),
            ));
        }
        let resume = match record.resume_at() {
            Some(end) if end <= self.old.len() => end,
            _ => {
                return Err(Error::malformed(
                    0,
                    format!(
                        "record #{index} deletes {} bytes at {}, past end of old sequence ({})",
                        record.deleted,
                        record.anchor,
                        self.old.len()
                    ),
                ));
            }
        };

        let unmodified = checked_slice(self.old, self.cursor..record.anchor)?;
        out.write_all(unmodified)?;
        out.write_all(&record.inserted)?;

        trace!(
            "applied record #{index}: kept {} bytes, inserted {}, skipped {}",
            unmodified.len(),
            record.inserted.len(),
            record.deleted
        );

        self.stats.records += 1;
        self.stats.bytes_written += (unmodified.len() + record.inserted.len()) as u64;
        self.cursor = resume;
        Ok(())
    }

    /// Finish the restore, copying the old tail when enabled.
    pub fn finish<W: Write>(mut self, out: &mut W) -> Result<ApplyStats> {
        if self.copy_tail {
            let tail = checked_slice(self.old, self.cursor..self.old.len())?;
            out.write_all(tail)?;
            self.stats.tail_copied = tail.len() as u64;
            self.stats.bytes_written += tail.len() as u64;
        }
        debug!(
            "restore finished: {} records, {} bytes written ({} from tail)",
            self.stats.records, self.stats.bytes_written, self.stats.tail_copied
        );
        Ok(self.stats)
    }

    /// Parse records from `diff` and apply them all into `out`.
    pub fn restore_to<R: Read, W: Write>(mut self, diff: R, out: &mut W) -> Result<ApplyStats> {
        let mut reader = RecordReader::new(diff);
        while let Some(record) = reader.next_record()? {
            self.apply_record(&record, out)?;
        }
        self.finish(out)
    }
}
