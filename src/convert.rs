//! Batch conversion pipeline.
//!
//! Drives parse → map → encode → archive across a batch of input files.
//! Each file is processed independently and to completion before the next
//! begins; a bad file is reported in the outcome list and never aborts the
//! rest of the batch. The engine does no I/O: inputs are byte buffers, the
//! output is a byte buffer.

use crate::archive::ArchiveBuilder;
use crate::error::{ConvertError, FileError};
use crate::formats::mela;
use crate::formats::paprika;
use crate::mappings::map_recipe;

/// One input file handed to the converter.
///
/// `name` is used for diagnostics only; it is never resolved as a path.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        InputFile {
            name: name.into(),
            contents,
        }
    }
}

/// Per-file conversion result.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The file converted; `entry` is the archive entry it became.
    Converted {
        filename: String,
        entry: String,
        /// Notes about source data the target schema could not carry.
        warnings: Vec<String>,
    },
    /// The file was skipped; `error` says why.
    Failed { filename: String, error: FileError },
}

impl Outcome {
    pub fn filename(&self) -> &str {
        match self {
            Outcome::Converted { filename, .. } => filename,
            Outcome::Failed { filename, .. } => filename,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted { .. })
    }
}

/// Result of converting one batch.
#[derive(Debug)]
pub struct BatchResult {
    /// The assembled `.paprikarecipes` bundle (a ZIP container). Holds one
    /// entry per successfully converted file; valid even when empty.
    pub archive: Vec<u8>,
    /// One outcome per input file, in input order.
    pub outcomes: Vec<Outcome>,
}

impl BatchResult {
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }
}

/// Convert a batch of Mela export files into one Paprika bundle.
///
/// Per-file failures are captured into the outcome list; the returned `Err`
/// is reserved for invalid call arguments and archive assembly failures.
pub fn convert_batch(files: &[InputFile]) -> Result<BatchResult, ConvertError> {
    if let Some(index) = files.iter().position(|f| f.name.is_empty()) {
        return Err(ConvertError::EmptyFilename(index));
    }

    let mut builder = ArchiveBuilder::new();
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        match convert_file(file) {
            Ok(converted) => {
                let entry = builder.add(&converted.display_name, converted.encoded);
                outcomes.push(Outcome::Converted {
                    filename: file.name.clone(),
                    entry,
                    warnings: converted.warnings,
                });
            }
            Err(error) => outcomes.push(Outcome::Failed {
                filename: file.name.clone(),
                error,
            }),
        }
    }

    let archive = builder.finish()?;
    Ok(BatchResult { archive, outcomes })
}

struct ConvertedFile {
    display_name: String,
    encoded: Vec<u8>,
    warnings: Vec<String>,
}

fn convert_file(file: &InputFile) -> Result<ConvertedFile, FileError> {
    let source = mela::parse_recipe(&file.contents)?;
    let mapped = map_recipe(&source);
    let encoded = paprika::encode_recipe(&mapped.recipe)?;

    Ok(ConvertedFile {
        display_name: mapped.recipe.name,
        encoded,
        warnings: mapped.warnings,
    })
}
