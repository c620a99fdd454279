//! Crate-wide error types for the individual decode stages.
//!
//! Each algorithmic stage gets a small `Copy`/`Clone` enum with a manual
//! `Display`/`Error` impl rather than pulling in `thiserror`. The outermost
//! orchestration layer (`model`, `catalog`) collapses these into
//! `anyhow::Result`.

use std::fmt;

/// A primitive read ran past the end of its byte source.
///
/// Spec §4.1: "Reads past end of source are a fatal condition; propagate an
/// end-of-input error. Short reads return no partial value."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read past end of input")
    }
}

impl std::error::Error for EndOfInput {}

/// A handle named an archive index outside the catalog.
///
/// Spec §7: "Out-of-range archive index in a handle: asserted; programming
/// error." Surfaced as an `Err` here rather than a panic so a consuming
/// viewer can report the offending archive instead of crashing the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveIndexOutOfRange {
    pub index: u32,
    pub catalog_size: u32,
}

impl fmt::Display for ArchiveIndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "archive index {} out of range (catalog has {} entries)",
            self.index, self.catalog_size
        )
    }
}

impl std::error::Error for ArchiveIndexOutOfRange {}
