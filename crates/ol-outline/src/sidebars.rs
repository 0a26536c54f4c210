//! Outline file loading.
//!
//! An outline file is a YAML mapping whose `sidebars` key holds the
//! top-level sidebar entries. Other document properties (`path`, plus any
//! pass-through keys) are preserved alongside the normalized entries.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::OutlineError;
use crate::item::{NormalizedItem, normalize_item};

/// One parsed outline file: normalized sidebars plus document properties.
///
/// Read once per source file and discarded after extraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarsFile {
    /// Top-level sidebar entries, normalized.
    pub sidebars: Vec<NormalizedItem>,
    /// Base path for hrefs of topics declared in this file.
    pub path: Option<String>,
    /// Remaining document properties, passed through untouched.
    pub extra: BTreeMap<String, Value>,
}

/// Read and parse an outline file.
///
/// # Errors
///
/// Returns [`OutlineError`] when the file cannot be read, is not valid
/// YAML, is not a mapping with a `sidebars` sequence, or any sidebar
/// entry fails normalization.
pub fn load_sidebars(file: &Path) -> Result<SidebarsFile, OutlineError> {
    let content = fs::read_to_string(file)?;
    parse_sidebars(&content, file)
}

/// Parse outline file content.
///
/// `file` is used only for error reporting.
///
/// # Errors
///
/// Same conditions as [`load_sidebars`], minus the read failure.
pub fn parse_sidebars(content: &str, file: &Path) -> Result<SidebarsFile, OutlineError> {
    let document: Value = serde_yaml::from_str(content)?;

    let Value::Mapping(map) = &document else {
        return Err(OutlineError::NotAMapping {
            file: file.to_path_buf(),
        });
    };

    let Some(Value::Sequence(entries)) = document.get("sidebars") else {
        return Err(OutlineError::SidebarsNotSequence {
            file: file.to_path_buf(),
        });
    };

    let sidebars = entries
        .iter()
        .map(normalize_item)
        .collect::<Result<Vec<_>, _>>()?;

    let path = document
        .get("path")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    let extra = map
        .iter()
        .filter_map(|(key, value)| match key {
            Value::String(k) if k != "sidebars" && k != "path" => {
                Some((k.clone(), value.clone()))
            }
            _ => None,
        })
        .collect();

    Ok(SidebarsFile {
        sidebars,
        path,
        extra,
    })
}
