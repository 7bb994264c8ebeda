//! Parsing of `.melarecipe` documents.

use serde_json::Value;

use super::MelaRecipe;
use crate::error::FileError;

/// Parse one Mela export document.
///
/// The only hard requirement is that the bytes decode as a JSON object.
/// Everything inside the object is optional and loosely typed; per-field
/// coercion happens later, in the mapping layer.
pub fn parse_recipe(bytes: &[u8]) -> Result<MelaRecipe, FileError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| FileError::Parse(format!("invalid JSON: {e}")))?;

    if !value.is_object() {
        return Err(FileError::Parse(
            "top-level value is not an object".to_string(),
        ));
    }

    // The loose-field unions all carry a Value catch-all, so this cannot
    // fail for an object; the map_err covers the invariant anyway.
    serde_json::from_value(value)
        .map_err(|e| FileError::Parse(format!("unexpected document shape: {e}")))
}
