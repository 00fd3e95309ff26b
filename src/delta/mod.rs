// Record-level diff and restore.
//
// - `encoder`: DiffEncoder: alignment to records, streamed to a writer
// - `applier`: DiffApplier: old sequence + records to a sink

pub mod applier;
pub mod encoder;

pub use applier::{ApplyStats, DiffApplier};
pub use encoder::{DiffEncoder, EncodeSummary, diff_records};
