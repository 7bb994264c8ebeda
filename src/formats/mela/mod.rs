//! Mela export format (input side)
//!
//! Data Model:
//!
//!     A `.melarecipe` file is a single JSON object. No field is guaranteed present,
//!     and the ones that are present are only loosely typed: `ingredients` may be one
//!     pre-joined string or a list of lines, `images` entries may be bare base64
//!     payloads or objects wrapping a payload with metadata, and any scalar may turn
//!     out not to be a string at all.
//!
//!     Rather than poking at `serde_json::Value` ad hoc, every loose field is modeled
//!     as an untagged union so the mapper can handle each shape exhaustively. The
//!     unions all end in a `Value` catch-all, which makes deserialization of a
//!     well-formed object infallible; rejecting junk happens in the mapping layer,
//!     field by field, never for the document as a whole.
//!
//!     Field names below are the wire contract with Mela's exporter and must not be
//!     renamed.

pub mod parser;

pub use parser::parse_recipe;

use serde::Deserialize;
use serde_json::Value;

/// A scalar field that should be a string but is not guaranteed to be one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Text(String),
    Other(Value),
}

/// A field that arrives either as one pre-joined string or as a list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrLines {
    Text(String),
    Lines(Vec<Value>),
    Other(Value),
}

/// A field that should be a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseList {
    Entries(Vec<Value>),
    Other(Value),
}

/// One element of the `images` array.
///
/// Mela usually stores bare base64 payloads, but some exports wrap the
/// payload in an object together with a filename.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Data(String),
    Detailed {
        data: String,
        #[serde(default)]
        filename: Option<String>,
    },
    Other(Value),
}

impl ImageEntry {
    /// The base64 payload, if this entry carries a usable one.
    pub fn payload(&self) -> Option<&str> {
        match self {
            ImageEntry::Data(data) => Some(data),
            ImageEntry::Detailed { data, .. } => Some(data),
            ImageEntry::Other(_) => None,
        }
    }
}

/// The `images` field as a whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageList {
    Entries(Vec<ImageEntry>),
    Other(Value),
}

/// A parsed Mela recipe.
///
/// Every field is optional; absence must not fail conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MelaRecipe {
    pub title: Option<LooseText>,
    pub text: Option<LooseText>,
    pub ingredients: Option<TextOrLines>,
    pub instructions: Option<TextOrLines>,
    #[serde(rename = "prepTime")]
    pub prep_time: Option<LooseText>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<LooseText>,
    #[serde(rename = "totalTime")]
    pub total_time: Option<LooseText>,
    #[serde(rename = "yield")]
    pub servings: Option<LooseText>,
    pub notes: Option<LooseText>,
    pub nutrition: Option<LooseText>,
    pub categories: Option<LooseList>,
    pub link: Option<LooseText>,
    pub images: Option<ImageList>,
}
