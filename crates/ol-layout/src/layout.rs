//! Layout assembly.
//!
//! Orchestrates the whole pipeline: discover outline files, validate
//! them, detect duplicated labels, and build one tree per surviving
//! top-level sidebar. The contract is best-effort: a broken file is
//! excluded with a warning, and an internal failure degrades to an empty
//! layout instead of aborting the caller's whole documentation build.

use std::collections::BTreeMap;

use ol_files::files_from_patterns;
use ol_outline::{load_sidebars, validate_files};

use crate::build::{BuildContext, BuildError, SidebarNode, build_items};
use crate::duplicates::find_duplicated_labels;
use crate::persister::TopicPersister;

/// Final layout: top-level sidebar label → built tree.
///
/// Keys are held in sorted order so the generated sidebars file is
/// deterministic. When the same non-duplicated label is contributed by
/// more than one file (possible only through files excluded from the
/// duplicate scan), the last file in sorted discovery order wins.
pub type LayoutMapping = BTreeMap<String, Vec<SidebarNode>>;

/// Options for [`build_layout`].
pub struct LayoutOptions<'a> {
    /// Patterns tried when the primary patterns match nothing.
    pub fallback_patterns: Vec<String>,
    /// Capability that persists topic documents.
    pub persister: &'a dyn TopicPersister,
}

/// Build the full sidebar layout from outline file patterns.
///
/// Discovery uses `patterns` with `options.fallback_patterns` as
/// fallback. Invalid files are excluded and logged; duplicated top-level
/// labels are excluded and logged. Internal errors are caught here:
/// the function logs and returns an empty mapping rather than
/// propagating, so one bad outline never sinks the surrounding build.
#[must_use]
pub fn build_layout(patterns: &[String], options: &LayoutOptions<'_>) -> LayoutMapping {
    match try_build_layout(patterns, options) {
        Ok(layout) => layout,
        Err(e) => {
            tracing::error!(error = %e, "Sidebar layout build failed");
            LayoutMapping::new()
        }
    }
}

/// Fallible layout assembly; [`build_layout`] degrades its errors.
fn try_build_layout(
    patterns: &[String],
    options: &LayoutOptions<'_>,
) -> Result<LayoutMapping, BuildError> {
    let files = files_from_patterns(patterns, &options.fallback_patterns);

    let validation = validate_files(&files);
    for (file, errors) in &validation.invalid_files {
        tracing::warn!(
            file = %file.display(),
            errors = %errors.join("; "),
            "Excluding invalid outline file"
        );
    }

    let report = find_duplicated_labels(&validation.valid_files)?;
    for label in &report.duplicated {
        tracing::warn!(label = %label, "Excluding duplicated sidebar label");
    }

    let mut layout = LayoutMapping::new();

    for file in &validation.valid_files {
        let sidebars_file = load_sidebars(file)?;
        let base_path = sidebars_file.path.clone().unwrap_or_default();

        for sidebar in &sidebars_file.sidebars {
            if report.duplicated.contains(&sidebar.label) {
                continue;
            }

            let ctx = BuildContext::new(base_path.clone(), options.persister);
            let nodes = build_items(sidebar.items.as_deref().unwrap_or(&[]), &ctx)?;
            layout.insert(sidebar.label.clone(), nodes);
        }
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;

    use crate::build::{LinkNode, NodeType};
    use crate::persister::NullTopicPersister;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn options(persister: &dyn TopicPersister) -> LayoutOptions<'_> {
        LayoutOptions {
            fallback_patterns: Vec::new(),
            persister,
        }
    }

    fn pattern(dir: &Path, glob: &str) -> Vec<String> {
        vec![format!("{}/{glob}", dir.display())]
    }

    #[test]
    fn test_layout_merges_files_into_one_mapping() {
        let temp = tempfile::tempdir().unwrap();
        write(
            temp.path(),
            "a.outline.yaml",
            "path: docs-a\nsidebars:\n  - label: Intro\n    items:\n      - Start\n",
        );
        write(
            temp.path(),
            "b.outline.yaml",
            concat!(
                "path: docs-b\n",
                "sidebars:\n",
                "  - label: Guides\n",
                "    items:\n",
                "      - label: Adv\n",
                "        href: /adv\n",
            ),
        );

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &options(&NullTopicPersister),
        );

        assert_eq!(
            layout.get("Intro"),
            Some(&vec![SidebarNode::Topic("docs-a/start".to_owned())])
        );
        assert_eq!(
            layout.get("Guides"),
            Some(&vec![SidebarNode::Link(LinkNode {
                node_type: NodeType::Link,
                label: "Adv".to_owned(),
                href: "/adv".to_owned(),
                title: None,
            })])
        );
    }

    #[test]
    fn test_layout_excludes_duplicated_labels() {
        let temp = tempfile::tempdir().unwrap();
        write(
            temp.path(),
            "a.outline.yaml",
            "sidebars:\n  - label: Guide\n    items:\n      - One\n  - label: Kept\n",
        );
        write(
            temp.path(),
            "b.outline.yaml",
            "sidebars:\n  - label: Guide\n    items:\n      - Two\n",
        );

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &options(&NullTopicPersister),
        );

        assert!(!layout.contains_key("Guide"));
        assert!(layout.contains_key("Kept"));
    }

    #[test]
    fn test_layout_excludes_invalid_files_but_keeps_valid() {
        let temp = tempfile::tempdir().unwrap();
        write(
            temp.path(),
            "good.outline.yaml",
            "sidebars:\n  - label: Guide\n    items:\n      - One\n",
        );
        write(temp.path(), "bad.outline.yaml", "sidebars: nope\n");

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &options(&NullTopicPersister),
        );

        assert_eq!(layout.len(), 1);
        assert!(layout.contains_key("Guide"));
    }

    #[test]
    fn test_layout_uses_fallback_patterns() {
        let temp = tempfile::tempdir().unwrap();
        write(
            temp.path(),
            "fallback.yaml",
            "sidebars:\n  - label: FromFallback\n",
        );

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &LayoutOptions {
                fallback_patterns: pattern(temp.path(), "*.yaml"),
                persister: &NullTopicPersister,
            },
        );

        assert!(layout.contains_key("FromFallback"));
    }

    #[test]
    fn test_layout_no_files_is_empty() {
        let temp = tempfile::tempdir().unwrap();

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &options(&NullTopicPersister),
        );

        assert!(layout.is_empty());
    }

    #[test]
    fn test_layout_sidebar_without_items_is_empty_tree() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), "a.outline.yaml", "sidebars:\n  - label: Bare\n");

        let layout = build_layout(
            &pattern(temp.path(), "*.outline.yaml"),
            &options(&NullTopicPersister),
        );

        assert_eq!(layout.get("Bare"), Some(&Vec::new()));
    }
}
