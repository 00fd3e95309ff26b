// Diff encoder: turns an alignment into edit records.
//
// Only gaps between consecutive common elements become records. Content
// before the first and after the last common element is never described.

use std::io::Write;

use log::debug;

use crate::error::{Error, Result};
use crate::format::{DiffRecord, RecordWriter};
use crate::lcs::{self, CommonElement};

/// Build the records describing every non-empty gap between consecutive
/// common elements, in ascending anchor order.
///
/// `common` must be ascending in both positions and index into `new`.
pub fn diff_records(new: &[u8], common: &[CommonElement]) -> Vec<DiffRecord> {
    common
        .windows(2)
        .filter_map(|pair| {
            let (prev, cur) = (pair[0], pair[1]);
            let old_gap = cur.old_pos - prev.old_pos;
            let new_gap = cur.new_pos - prev.new_pos;
            if old_gap > 1 || new_gap > 1 {
                let start = prev.new_pos + 1;
                Some(DiffRecord::new(
                    prev.old_pos + 1,
                    old_gap - 1,
                    new[start..start + new_gap - 1].to_vec(),
                ))
            } else {
                None
            }
        })
        .collect()
}

/// What one `DiffEncoder::encode` call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Number of common elements in the alignment.
    pub common: usize,
    /// Number of records written.
    pub records: usize,
    /// Bytes of diff stream written.
    pub bytes: u64,
}

/// Aligns old/new pairs and streams their records to a writer.
pub struct DiffEncoder<W: Write> {
    stream: RecordWriter<W>,
    max_table_cells: u64,
}

impl<W: Write> DiffEncoder<W> {
    pub fn new(writer: W, max_table_cells: u64) -> Self {
        Self {
            stream: RecordWriter::new(writer),
            max_table_cells,
        }
    }

    /// Align `old` against `new` and write the resulting records.
    ///
    /// Nothing is written if alignment fails.
    pub fn encode(&mut self, old: &[u8], new: &[u8]) -> Result<EncodeSummary> {
        let common = lcs::align(old, new, self.max_table_cells)?;
        let records = diff_records(new, &common);

        let before = self.stream.bytes_written();
        for record in &records {
            self.stream.write_record(record).map_err(Error::Io)?;
        }
        let bytes = self.stream.bytes_written() - before;

        debug!(
            "encoded {} common elements into {} records ({bytes} bytes)",
            common.len(),
            records.len()
        );

        Ok(EncodeSummary {
            common: common.len(),
            records: records.len(),
            bytes,
        })
    }

    /// Flush and return the inner writer.
    pub fn finish(self) -> Result<W> {
        Ok(self.stream.finish()?)
    }
}
