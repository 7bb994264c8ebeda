//! Paprika import format (output side)
//!
//! Data Model:
//!
//!     A `.paprikarecipe` entry is a gzip-compressed JSON document with a fixed key
//!     set. Paprika's importer assumes the full key set exists, so every key is
//!     always serialized, with empty strings and empty lists standing in for data
//!     the source lacked. Struct field order is the serialization order.
//!
//!     | Paprika key      | filled from          |
//!     | name             | title (with fallbacks, see the mapping layer)
//!     | description      | text
//!     | ingredients      | ingredients, newline-joined
//!     | directions       | instructions, newline-joined
//!     | servings         | yield
//!     | prep_time        | prepTime
//!     | cook_time        | cookTime
//!     | total_time       | totalTime
//!     | notes            | notes
//!     | nutritional_info | nutrition
//!     | categories       | categories, string entries only
//!     | source           | link
//!     | source_url       | link
//!     | photo_data       | first usable entry of images
//!
//!     `rating`, `difficulty`, `image_url`, `photo_hash` and `photo` are emitted as
//!     constants; Paprika fills them in after import. There is deliberately no `uid`
//!     and no `created` timestamp: both would differ run to run, and converting the
//!     same input twice must yield byte-identical bundles. Paprika assigns identity
//!     to imported recipes itself.

pub mod serializer;

pub use serializer::encode_recipe;

use serde::Serialize;

/// A fully normalized Paprika recipe.
///
/// Construction goes through the mapping layer, which guarantees every
/// field holds a serialized-safe value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaprikaRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub notes: String,
    pub nutritional_info: String,
    pub categories: Vec<String>,
    pub rating: u32,
    pub difficulty: Option<String>,
    pub source: String,
    pub source_url: String,
    pub image_url: Option<String>,
    pub photo_hash: Option<String>,
    pub photo: Option<String>,
    pub photo_data: String,
}
