// Diff stream parser.
//
// Mirrors the legacy reader: each integer is preceded by an optional run of
// C-locale whitespace, accepts an optional sign, and is parsed greedily as
// decimal. The payload starts at the byte right after the last digit of the
// inserted count. End of stream is only legal between records.
//
// All wire parsing lives here so a different header encoding can replace it
// without touching alignment or record application.

use std::io::{BufRead, BufReader, Read};

use log::trace;

use super::record::DiffRecord;
use crate::error::{Error, Result};

/// Whitespace as understood by C `isspace` in the "C" locale.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Streams `DiffRecord`s out of any `Read` source.
pub struct RecordReader<R: Read> {
    reader: BufReader<R>,
    offset: u64,
    records_read: u64,
    failed: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            offset: 0,
            records_read: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread byte.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Parse the next record. `Ok(None)` once the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<DiffRecord>> {
        self.skip_space()?;
        if self.peek()?.is_none() {
            return Ok(None);
        }

        let anchor = self.read_count("anchor")?;
        let deleted = self.read_count("deleted count")?;
        let inserted_len = self.read_count("inserted count")?;
        let inserted = self.read_payload(inserted_len)?;

        trace!(
            "read record #{}: anchor={anchor} deleted={deleted} inserted={inserted_len}",
            self.records_read
        );
        self.records_read += 1;
        Ok(Some(DiffRecord::new(anchor, deleted, inserted)))
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        Ok(buf.first().copied())
    }

    fn bump(&mut self) {
        self.reader.consume(1);
        self.offset += 1;
    }

    fn skip_space(&mut self) -> Result<()> {
        while let Some(b) = self.peek()? {
            if !is_space(b) {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    fn read_count(&mut self, field: &str) -> Result<usize> {
        self.skip_space()?;
        let start = self.offset;

        let negative = match self.peek()? {
            None => {
                return Err(Error::malformed(
                    start,
                    format!("unexpected end of stream before {field}"),
                ));
            }
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            Some(_) => false,
        };

        let mut value: u64 = 0;
        let mut digits = 0usize;
        while let Some(b) = self.peek()? {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
                .ok_or_else(|| Error::malformed(start, format!("{field} overflows")))?;
            digits += 1;
            self.bump();
        }

        if digits == 0 {
            let found = match self.peek()? {
                Some(b) => format!("byte {b:#04x}"),
                None => "end of stream".to_string(),
            };
            return Err(Error::malformed(
                start,
                format!("expected decimal {field}, found {found}"),
            ));
        }
        if negative && value != 0 {
            return Err(Error::malformed(start, format!("negative {field}")));
        }

        usize::try_from(value)
            .map_err(|_| Error::malformed(start, format!("{field} does not fit in usize")))
    }

    fn read_payload(&mut self, len: usize) -> Result<Vec<u8>> {
        let start = self.offset;
        let mut payload = Vec::new();
        let n = (&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut payload)?;
        self.offset += n as u64;

        if n < len {
            return Err(Error::malformed(
                start,
                format!("truncated payload: expected {len} bytes, found {n}"),
            ));
        }
        Ok(payload)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<DiffRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse a complete in-memory diff stream.
pub fn decode_records(diff: &[u8]) -> Result<Vec<DiffRecord>> {
    RecordReader::new(diff).collect()
}
