// Diff stream writer.
//
// Wire layout per record: `<anchor> <deleted> <inserted>` in ASCII decimal,
// single spaces between the integers, then exactly `<inserted>` raw payload
// bytes with no delimiter. Records after the first are preceded by one
// space. There is no header, count or terminator.

use std::io::{self, Write};

use log::{trace, warn};

use super::record::DiffRecord;

/// Streams `DiffRecord`s to a `Write` sink in the legacy wire format.
pub struct RecordWriter<W: Write> {
    writer: W,
    records_written: u64,
    bytes_written: u64,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
            bytes_written: 0,
        }
    }

    /// Append one record.
    pub fn write_record(&mut self, record: &DiffRecord) -> io::Result<()> {
        // A payload starting with a digit would be read back as part of
        // the inserted count.
        if record.inserted.first().is_some_and(u8::is_ascii_digit) {
            warn!(
                "record at old offset {} has a payload starting with an ASCII digit; \
                 readers cannot delimit it",
                record.anchor
            );
        }

        let head = if self.records_written == 0 {
            format!("{} {} {}", record.anchor, record.deleted, record.inserted.len())
        } else {
            format!(" {} {} {}", record.anchor, record.deleted, record.inserted.len())
        };
        self.writer.write_all(head.as_bytes())?;
        self.writer.write_all(&record.inserted)?;

        trace!(
            "wrote record #{}: anchor={} deleted={} inserted={}",
            self.records_written,
            record.anchor,
            record.deleted,
            record.inserted.len()
        );

        self.records_written += 1;
        self.bytes_written += (head.len() + record.inserted.len()) as u64;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Serialize `records` into a fresh buffer.
pub fn encode_records(records: &[DiffRecord]) -> Vec<u8> {
    let mut out = RecordWriter::new(Vec::new());
    for record in records {
        // Writing into a Vec cannot fail.
        let _ = out.write_record(record);
    }
    out.writer
}
