//! Cross-file duplicate label detection.
//!
//! A sidebar label must be unique across the whole file set; a duplicated
//! label would make the merged layout ambiguous. Duplication is detected
//! on top-level labels only (nested labels may repeat freely) and is
//! data, not an error: callers exclude duplicated labels from the layout
//! and surface an advisory report.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use ol_outline::{OutlineError, load_sidebars};

/// Occurrence counts for one top-level label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSummary {
    /// Total occurrences across all files.
    pub count: usize,
    /// Occurrences per file; a label repeated within one file counts
    /// each time.
    pub per_file: BTreeMap<PathBuf, usize>,
}

/// Result of scanning a file set for duplicated top-level labels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Labels whose total count exceeds one.
    pub duplicated: BTreeSet<String>,
    /// Occurrence summary for every label seen.
    pub summary: BTreeMap<String, LabelSummary>,
}

impl DuplicateReport {
    /// Whether any label is duplicated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duplicated.is_empty()
    }
}

/// Scan files for top-level sidebar labels declared more than once.
///
/// # Errors
///
/// Returns [`OutlineError`] when a file cannot be loaded or its
/// `sidebars` value is not a sequence of valid items.
pub fn find_duplicated_labels(files: &[PathBuf]) -> Result<DuplicateReport, OutlineError> {
    let mut summary: BTreeMap<String, LabelSummary> = BTreeMap::new();

    for file in files {
        record_file_labels(file, &mut summary)?;
    }

    let duplicated = summary
        .iter()
        .filter(|(_, entry)| entry.count > 1)
        .map(|(label, _)| label.clone())
        .collect();

    Ok(DuplicateReport {
        duplicated,
        summary,
    })
}

/// Count one file's top-level labels into the summary.
fn record_file_labels(
    file: &Path,
    summary: &mut BTreeMap<String, LabelSummary>,
) -> Result<(), OutlineError> {
    let sidebars_file = load_sidebars(file)?;

    for sidebar in &sidebars_file.sidebars {
        let entry = summary.entry(sidebar.label.clone()).or_default();
        entry.count += 1;
        *entry.per_file.entry(file.to_path_buf()).or_default() += 1;
    }

    Ok(())
}
