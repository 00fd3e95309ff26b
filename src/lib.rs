//! lcsdelta: longest-common-subsequence binary diff and restore.
//!
//! The crate provides:
//! - Byte-level LCS alignment (`lcs`)
//! - The legacy diff record format (`format`)
//! - Record construction and application (`delta`)
//! - In-memory entry points (`engine`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use lcsdelta::engine;
//!
//! let old = b"hello old world";
//! let new = b"hello new world";
//!
//! let diff = engine::produce_diff(old, new).unwrap();
//! let restored = engine::apply_diff(old, &diff).unwrap();
//! assert_eq!(restored, new);
//! ```
//!
//! Only edits between the first and last matched byte are encoded; see
//! `engine::RestoreOptions` for how the old sequence's edges are handled.

pub mod buffer;
pub mod delta;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod lcs;

#[cfg(feature = "cli")]
pub mod cli;

pub use buffer::ByteSequence;
pub use engine::{DiffOptions, RestoreOptions, apply_diff, produce_diff};
pub use error::{Error, Result};
