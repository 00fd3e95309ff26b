// Diff stream format.
//
// A diff is a flat sequence of records, each a text header of three
// decimal integers followed by a raw binary payload.
//
// # Modules
//
// - `record`: `DiffRecord` type
// - `writer`: record serialization to any `Write`
// - `reader`: streaming record parser over any `Read`

pub mod reader;
pub mod record;
pub mod writer;

pub use reader::{RecordReader, decode_records};
pub use record::DiffRecord;
pub use writer::{RecordWriter, encode_records};
