// Diff record: one edit region between two consecutive common elements.

/// Replace `deleted` old bytes at `anchor` with `inserted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffRecord {
    /// Old-sequence position right after the previous common element.
    pub anchor: usize,
    /// Number of old bytes skipped starting at `anchor`.
    pub deleted: usize,
    /// Bytes copied verbatim from the new sequence.
    pub inserted: Vec<u8>,
}

impl DiffRecord {
    pub fn new(anchor: usize, deleted: usize, inserted: Vec<u8>) -> Self {
        Self {
            anchor,
            deleted,
            inserted,
        }
    }

    /// The inserted count as it appears on the wire.
    pub fn inserted_len(&self) -> usize {
        self.inserted.len()
    }

    /// A 0/0 record changes nothing. Legal on input, never produced.
    pub fn is_noop(&self) -> bool {
        self.deleted == 0 && self.inserted.is_empty()
    }

    /// First old position after the deleted span.
    pub fn resume_at(&self) -> Option<usize> {
        self.anchor.checked_add(self.deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_and_resume() {
        let r = DiffRecord::new(4, 0, Vec::new());
        assert!(r.is_noop());
        assert_eq!(r.resume_at(), Some(4));

        let r = DiffRecord::new(3, 2, b"xyz".to_vec());
        assert!(!r.is_noop());
        assert_eq!(r.inserted_len(), 3);
        assert_eq!(r.resume_at(), Some(5));

        let r = DiffRecord::new(usize::MAX, 1, Vec::new());
        assert_eq!(r.resume_at(), None);
    }
}
