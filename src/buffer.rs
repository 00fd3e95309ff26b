// Owned byte buffer used for old/new inputs and restored output.
//
// Fixed length once created. Indexing goes through `get`/`slice`, which
// report `Error::IndexOutOfRange` instead of panicking.

use std::ops::Range;

use crate::error::{Error, Result};

/// An owned, fixed-length, randomly indexable sequence of bytes.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ByteSequence {
    bytes: Box<[u8]>,
}

impl ByteSequence {
    /// Take ownership of `bytes`.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `pos`.
    pub fn get(&self, pos: usize) -> Result<u8> {
        self.bytes
            .get(pos)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: pos,
                len: self.bytes.len(),
            })
    }

    /// Sub-slice `range`, checked against the sequence length.
    pub fn slice(&self, range: Range<usize>) -> Result<&[u8]> {
        checked_slice(&self.bytes, range)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

/// Bounds-checked `&bytes[range]`.
pub fn checked_slice(bytes: &[u8], range: Range<usize>) -> Result<&[u8]> {
    let len = bytes.len();
    if range.start > range.end {
        return Err(Error::IndexOutOfRange {
            index: range.start,
            len,
        });
    }
    let end = range.end;
    bytes
        .get(range)
        .ok_or(Error::IndexOutOfRange { index: end, len })
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteSequence")
            .field("len", &self.bytes.len())
            .finish()
    }
}
