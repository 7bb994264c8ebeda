//! Serialization of normalized recipes into `.paprikarecipe` payloads.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use super::PaprikaRecipe;
use crate::error::FileError;

/// Encode one recipe as a gzip-compressed JSON document.
///
/// Deterministic: key order is fixed by the struct definition and the gzip
/// header carries no timestamp, so identical records encode to identical
/// bytes.
pub fn encode_recipe(recipe: &PaprikaRecipe) -> Result<Vec<u8>, FileError> {
    let json = serde_json::to_vec(recipe)
        .map_err(|e| FileError::Encode(format!("serialization failed: {e}")))?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&json)
        .map_err(|e| FileError::Encode(format!("compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| FileError::Encode(format!("compression failed: {e}")))
}
