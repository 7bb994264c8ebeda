//! Converts a parsed Mela recipe into the normalized Paprika model.
//!
//! # The High-Level Concept
//!
//! The mapping is total: it accepts any `MelaRecipe` the parser produces and
//! always yields a complete `PaprikaRecipe`. There is no error path. A field
//! holding the wrong shape degrades to the target's empty default instead of
//! failing the recipe.
//!
//! # The Coercion Rules
//!
//! 1. **Scalar text fields** (title, text, times, yield, notes, nutrition,
//!    link): kept trimmed when the value is a string, `""` otherwise.
//!
//! 2. **Line fields** (ingredients, instructions): a pre-joined string is
//!    kept trimmed; a list is reduced to its string elements joined with
//!    newlines. Element order is preserved exactly, since ingredient and
//!    step order is part of the recipe.
//!
//! 3. **Categories**: string entries kept in source order, duplicates and
//!    all; anything that is not a string is dropped.
//!
//! 4. **Images**: the first entry with a usable payload becomes
//!    `photo_data`. Paprika has a single photo slot, so further payloads
//!    cannot be carried; they are counted and surfaced as a warning rather
//!    than vanishing silently.
//!
//! 5. **Name fallbacks**: an absent or junk title falls back to a name
//!    derived from the last path segment of `link`, and failing that to
//!    "Untitled Recipe", so every recipe has a display name to build its
//!    archive entry from.

use serde_json::Value;

use crate::formats::mela::{ImageList, LooseList, LooseText, MelaRecipe, TextOrLines};
use crate::formats::paprika::PaprikaRecipe;

/// Name used when neither the title nor the link yields one.
pub const FALLBACK_NAME: &str = "Untitled Recipe";

/// Result of mapping one recipe: the normalized record plus notes about
/// source data the target schema cannot carry.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRecipe {
    pub recipe: PaprikaRecipe,
    pub warnings: Vec<String>,
}

/// Map one Mela recipe to the Paprika model. Total; never fails.
pub fn map_recipe(source: &MelaRecipe) -> MappedRecipe {
    let link = text(&source.link);
    let (photo_data, extra_images) = primary_photo(&source.images);

    let mut warnings = Vec::new();
    if extra_images > 0 {
        warnings.push(format!(
            "{extra_images} additional image(s) not carried over; Paprika holds a single photo"
        ));
    }

    let recipe = PaprikaRecipe {
        name: display_name(source),
        description: text(&source.text),
        ingredients: joined_lines(&source.ingredients),
        directions: joined_lines(&source.instructions),
        servings: text(&source.servings),
        prep_time: text(&source.prep_time),
        cook_time: text(&source.cook_time),
        total_time: text(&source.total_time),
        notes: text(&source.notes),
        nutritional_info: text(&source.nutrition),
        categories: string_entries(&source.categories),
        source: link.clone(),
        source_url: link,
        photo_data,
        ..PaprikaRecipe::default()
    };

    MappedRecipe { recipe, warnings }
}

fn text(field: &Option<LooseText>) -> String {
    match field {
        Some(LooseText::Text(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn joined_lines(field: &Option<TextOrLines>) -> String {
    match field {
        Some(TextOrLines::Text(s)) => s.trim().to_string(),
        Some(TextOrLines::Lines(lines)) => lines
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn string_entries(field: &Option<LooseList>) -> Vec<String> {
    match field {
        Some(LooseList::Entries(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// First usable payload plus the count of usable payloads left behind.
fn primary_photo(field: &Option<ImageList>) -> (String, usize) {
    let entries = match field {
        Some(ImageList::Entries(entries)) => entries,
        _ => return (String::new(), 0),
    };

    let mut payloads = entries.iter().filter_map(|entry| entry.payload());
    match payloads.next() {
        Some(first) => (first.to_string(), payloads.count()),
        None => (String::new(), 0),
    }
}

fn display_name(source: &MelaRecipe) -> String {
    let title = text(&source.title);
    if !title.is_empty() {
        return title;
    }

    let link = text(&source.link);
    if let Some(name) = name_from_link(&link) {
        return name;
    }

    FALLBACK_NAME.to_string()
}

/// Derive a readable name from the last path segment of a recipe URL,
/// e.g. "https://example.com/spicy-miso_ramen/" → "Spicy Miso Ramen".
fn name_from_link(link: &str) -> Option<String> {
    let segment = link.trim_end_matches('/').rsplit('/').next()?;
    let words: Vec<String> = segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::mela::parse_recipe;

    fn map_json(doc: &str) -> MappedRecipe {
        map_recipe(&parse_recipe(doc.as_bytes()).expect("fixture should parse"))
    }

    #[test]
    fn test_map_pasta_scenario() {
        let mapped = map_json(
            r#"{"title": "Pasta",
                "ingredients": ["Pasta", "Salt"],
                "instructions": ["Boil", "Drain"],
                "categories": ["Dinner"]}"#,
        );

        let recipe = &mapped.recipe;
        assert_eq!(recipe.name, "Pasta");
        assert_eq!(recipe.ingredients, "Pasta\nSalt");
        assert_eq!(recipe.directions, "Boil\nDrain");
        assert_eq!(recipe.categories, vec!["Dinner".to_string()]);
        assert_eq!(recipe.prep_time, "");
        assert_eq!(recipe.cook_time, "");
        assert_eq!(recipe.total_time, "");
        assert_eq!(recipe.servings, "");
        assert_eq!(recipe.notes, "");
        assert_eq!(recipe.nutritional_info, "");
        assert_eq!(recipe.source_url, "");
        assert_eq!(recipe.photo_data, "");
        assert!(mapped.warnings.is_empty());
    }

    #[test]
    fn test_map_empty_record_fills_every_field() {
        let mapped = map_recipe(&MelaRecipe::default());
        let recipe = &mapped.recipe;

        assert_eq!(recipe.name, FALLBACK_NAME);
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.ingredients, "");
        assert_eq!(recipe.directions, "");
        assert!(recipe.categories.is_empty());
        assert_eq!(recipe.photo_data, "");
    }

    #[test]
    fn test_map_prejoined_strings_kept() {
        let mapped = map_json(r#"{"ingredients": "Pasta\nSalt", "instructions": " Boil \n"}"#);
        assert_eq!(mapped.recipe.ingredients, "Pasta\nSalt");
        // Outer whitespace is cleaned, inner newlines are data.
        assert_eq!(mapped.recipe.directions, "Boil");
    }

    #[test]
    fn test_map_line_order_preserved() {
        let mapped = map_json(r#"{"ingredients": ["Salt", "Pasta", "Water", "Salt"]}"#);
        assert_eq!(mapped.recipe.ingredients, "Salt\nPasta\nWater\nSalt");
    }

    #[test]
    fn test_map_junk_fields_coerce_to_empty() {
        let mapped = map_json(
            r#"{"title": 42,
                "prepTime": {"minutes": 10},
                "ingredients": 3.5,
                "notes": null}"#,
        );
        assert_eq!(mapped.recipe.name, FALLBACK_NAME);
        assert_eq!(mapped.recipe.prep_time, "");
        assert_eq!(mapped.recipe.ingredients, "");
        assert_eq!(mapped.recipe.notes, "");
    }

    #[test]
    fn test_map_categories_keep_order_and_duplicates() {
        let mapped = map_json(r#"{"categories": ["Dinner", 7, "Quick", "Dinner", null]}"#);
        assert_eq!(
            mapped.recipe.categories,
            vec!["Dinner".to_string(), "Quick".to_string(), "Dinner".to_string()]
        );
    }

    #[test]
    fn test_map_link_fills_source_fields() {
        let mapped = map_json(r#"{"title": "Ramen", "link": "https://example.com/r/ramen"}"#);
        assert_eq!(mapped.recipe.source, "https://example.com/r/ramen");
        assert_eq!(mapped.recipe.source_url, "https://example.com/r/ramen");
    }

    #[test]
    fn test_map_name_derived_from_link() {
        let mapped = map_json(r#"{"link": "https://example.com/spicy-miso_ramen/"}"#);
        assert_eq!(mapped.recipe.name, "Spicy Miso Ramen");
    }

    #[test]
    fn test_map_whitespace_title_falls_back() {
        let mapped = map_json(r#"{"title": "   "}"#);
        assert_eq!(mapped.recipe.name, FALLBACK_NAME);
    }

    #[test]
    fn test_map_first_image_wins_and_extras_are_flagged() {
        let mapped = map_json(
            r#"{"images": ["QUJD", {"data": "REVG", "filename": "side.jpg"}, "R0hJ"]}"#,
        );
        assert_eq!(mapped.recipe.photo_data, "QUJD");
        assert_eq!(mapped.warnings.len(), 1);
        assert!(mapped.warnings[0].contains("2 additional image(s)"));
    }

    #[test]
    fn test_map_single_image_no_warning() {
        let mapped = map_json(r#"{"images": ["QUJD"]}"#);
        assert_eq!(mapped.recipe.photo_data, "QUJD");
        assert!(mapped.warnings.is_empty());
    }

    #[test]
    fn test_map_unusable_image_entries_skipped() {
        let mapped = map_json(r#"{"images": [17, {"data": "REVG"}]}"#);
        assert_eq!(mapped.recipe.photo_data, "REVG");
        assert!(mapped.warnings.is_empty());
    }
}
