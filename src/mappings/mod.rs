//! Contains logic for mapping between the Mela and Paprika recipe models.

pub mod mela_to_paprika;

pub use mela_to_paprika::{map_recipe, MappedRecipe};
