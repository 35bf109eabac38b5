//! # OreHints Resource Layer
//!
//! File emission and validation for generated resources.
//!
//! The core crates hand this layer logical paths (sequences of path
//! segments) and fully-built JSON documents; this layer owns serialization,
//! directory creation, and change bookkeeping. Two implementations of the
//! one [`writer::ResourceWriter`] interface exist:
//!
//! - [`writer::DiskWriter`] writes documents, classifying each as new,
//!   modified, or unchanged against what is already on disk.
//! - [`validate::ValidatingWriter`] never writes: it diffs generated
//!   documents against the committed tree, treating new files and content
//!   changes as regressions.
//!
//! Counters of new/modified/unchanged/error files are scoped to one writer
//! instance per invocation, never process-wide.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod clean;
pub mod document;
pub mod validate;
pub mod writer;

pub use clean::{clean_generated, clean_with_retry};
pub use document::{finalize, is_generated, strip_nulls, GENERATED_COMMENT};
pub use validate::ValidatingWriter;
pub use writer::{resource_path, DiskWriter, FileCounters, ResourceWriter, WriteOutcome};
