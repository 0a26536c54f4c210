//! Structural validation of outline file sets.
//!
//! Splits a candidate file set into valid and invalid files before layout
//! construction. Unlike [`load_sidebars`], which fails on the first bad
//! entry, validation inspects every sidebar entry and collects all errors
//! found per file, so one report covers the whole document.
//!
//! [`load_sidebars`]: crate::load_sidebars

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::item::normalize_item;

/// Outcome of validating a set of outline files.
///
/// Invalid files are reported and excluded from downstream processing;
/// they are never retried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileValidation {
    /// Files that passed structural validation.
    pub valid_files: Vec<PathBuf>,
    /// Per-file error descriptions for files that failed.
    pub invalid_files: BTreeMap<PathBuf, Vec<String>>,
}

/// Validate outline files against the outline document structure.
///
/// A file is valid when it reads and parses as YAML, the document is a
/// mapping, `sidebars` is present and a sequence, and every sidebar entry
/// normalizes without error.
#[must_use]
pub fn validate_files(files: &[PathBuf]) -> FileValidation {
    let mut validation = FileValidation::default();

    for file in files {
        let errors = file_errors(file);
        if errors.is_empty() {
            validation.valid_files.push(file.clone());
        } else {
            validation.invalid_files.insert(file.clone(), errors);
        }
    }

    validation
}

/// Collect every structural error found in one outline file.
fn file_errors(file: &Path) -> Vec<String> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => return vec![format!("I/O error: {e}")],
    };

    let document: Value = match serde_yaml::from_str(&content) {
        Ok(document) => document,
        Err(e) => return vec![format!("YAML parse error: {e}")],
    };

    if !document.is_mapping() {
        return vec!["outline document must be a mapping".to_owned()];
    }

    let Some(sidebars) = document.get("sidebars") else {
        return vec!["missing `sidebars` property".to_owned()];
    };
    let Some(entries) = sidebars.as_sequence() else {
        return vec!["`sidebars` must be a sequence".to_owned()];
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            normalize_item(entry)
                .err()
                .map(|e| format!("sidebars[{index}]: {e}"))
        })
        .collect()
}
