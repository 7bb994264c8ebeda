//! Error types for the conversion pipeline.
//!
//! Two layers, matching how failures propagate: `FileError` is scoped to one
//! input file and is captured into the batch outcome list, while
//! `ConvertError` aborts the whole `convert_batch` call.

use std::fmt;

/// Why a single input file failed to convert.
///
/// Captured per file; never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum FileError {
    /// Input bytes are not a well-formed Mela document
    Parse(String),
    /// A mapped recipe could not be serialized
    ///
    /// The mapper is total, so seeing this means a record slipped through
    /// that violates its coercion guarantees.
    Encode(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Parse(msg) => write!(f, "parse error: {msg}"),
            FileError::Encode(msg) => write!(f, "encode error: {msg}"),
        }
    }
}

impl std::error::Error for FileError {}

/// Batch-fatal failure of a `convert_batch` call.
///
/// Unlike `FileError`, these are returned as a hard `Err`: either the call
/// arguments were invalid or the output container could not be assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// An input carried an empty filename (position in the batch)
    EmptyFilename(usize),
    /// The output archive could not be assembled
    Archive(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::EmptyFilename(index) => {
                write!(f, "input file at position {index} has an empty filename")
            }
            ConvertError::Archive(msg) => write!(f, "archive error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
