//! Assembly of the `.paprikarecipes` bundle.
//!
//! The bundle is a ZIP container holding one already-compressed
//! `.paprikarecipe` entry per recipe. Entry names are slugs derived from the
//! recipe display name; a name collision gets a numeric suffix. Entries keep
//! their insertion order in the archive directory, so import order follows
//! batch order.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

use crate::error::ConvertError;

/// Extension Paprika expects for a single recipe entry.
pub const RECIPE_EXTENSION: &str = "paprikarecipe";

/// Name used when slugging leaves nothing over.
const EMPTY_SLUG: &str = "recipe";

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").unwrap());

/// Derive a filename-safe slug from a recipe display name.
///
/// Lowercases, strips characters unsafe for filenames and collapses
/// whitespace and hyphen runs to a single `-`. Never returns an empty
/// string.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = UNSAFE_CHARS.replace_all(&lowered, "");
    let collapsed = SEPARATOR_RUNS.replace_all(&stripped, "-");
    let slug = collapsed.trim_matches('-');

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Collects encoded recipes and assembles the output bundle.
pub struct ArchiveBuilder {
    entries: Vec<(String, Vec<u8>)>,
    used_names: HashSet<String>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        ArchiveBuilder {
            entries: Vec::new(),
            used_names: HashSet::new(),
        }
    }

    /// Add one encoded recipe under a unique entry name derived from
    /// `display_name`. Returns the name that was assigned.
    pub fn add(&mut self, display_name: &str, encoded: Vec<u8>) -> String {
        let slug = slugify(display_name);

        let mut candidate = slug.clone();
        let mut attempt = 1;
        while self.used_names.contains(&candidate) {
            attempt += 1;
            candidate = format!("{slug}-{attempt}");
        }
        self.used_names.insert(candidate.clone());

        let entry_name = format!("{candidate}.{RECIPE_EXTENSION}");
        self.entries.push((entry_name.clone(), encoded));
        entry_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write all entries into a ZIP container and return its bytes.
    ///
    /// Zero entries produce a valid empty archive. Entry timestamps are the
    /// ZIP epoch, keeping the output identical across runs.
    pub fn finish(self) -> Result<Vec<u8>, ConvertError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (name, bytes) in &self.entries {
            writer
                .start_file(name, options)
                .map_err(|e| ConvertError::Archive(format!("failed to start entry '{name}': {e}")))?;
            writer
                .write_all(bytes)
                .map_err(|e| ConvertError::Archive(format!("failed to write entry '{name}': {e}")))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| ConvertError::Archive(format!("failed to finalize archive: {e}")))?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
