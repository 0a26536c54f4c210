//! Topic document rendering and filesystem persistence.

use std::fs;
use std::path::PathBuf;

use ol_files::{ensure_extension, file_name, path_slugify};
use ol_layout::{PersistError, TopicPersister};
use ol_outline::NormalizedItem;

/// Render a topic's markdown document.
///
/// Emits frontmatter (`sidebar_label`, plus `title`/`slug`/`id` when
/// present), the H1 title, and one section per entry of the topic's
/// `headings` tree, nested headings one level deeper than their parent.
#[must_use]
pub fn render_topic(item: &NormalizedItem) -> String {
    let mut doc = String::new();

    doc.push_str("---\n");
    doc.push_str(&format!("sidebar_label: {}\n", item.label));
    if let Some(title) = &item.title {
        doc.push_str(&format!("title: {title}\n"));
    }
    if let Some(slug) = &item.slug {
        doc.push_str(&format!("slug: {slug}\n"));
    }
    if let Some(id) = &item.id {
        doc.push_str(&format!("id: {id}\n"));
    }
    doc.push_str("---\n\n");

    let title = item.title.as_deref().unwrap_or(&item.label);
    doc.push_str(&format!("# {title}\n"));

    if let Some(headings) = &item.headings {
        render_headings(&mut doc, headings, 2);
    }

    doc
}

/// Append heading sections at the given depth.
fn render_headings(doc: &mut String, headings: &[NormalizedItem], level: usize) {
    for heading in headings {
        doc.push('\n');
        doc.push_str(&format!("{} {}\n", "#".repeat(level), heading.label));
        let children = heading.items.as_deref().or(heading.headings.as_deref());
        if let Some(children) = children {
            render_headings(doc, children, level + 1);
        }
    }
}

/// Persists rendered topic documents under a docs root directory.
///
/// The target path is derived from the topic's resolved href: the
/// directory portion is slugified for the filesystem (hrefs keep their
/// original segments), and the `.md` extension is ensured.
pub struct FsTopicPersister {
    docs_root: PathBuf,
}

impl FsTopicPersister {
    /// Create a persister writing under `docs_root`.
    #[must_use]
    pub fn new(docs_root: PathBuf) -> Self {
        Self { docs_root }
    }

    /// Compute the filesystem target for a resolved href.
    fn target_path(&self, href: &str) -> Result<PathBuf, PersistError> {
        let relative = ensure_extension(href, "md")?;
        let directory = path_slugify(&relative);
        let filename = file_name(&relative);

        let mut target = self.docs_root.clone();
        if !directory.is_empty() {
            target.push(&directory);
        }
        target.push(filename);
        Ok(target)
    }
}

impl TopicPersister for FsTopicPersister {
    fn save(&self, item: &NormalizedItem, href: &str) -> Result<(), PersistError> {
        let target = self.target_path(href)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        tracing::debug!(href, target = %target.display(), "Writing topic document");
        fs::write(&target, render_topic(item)).map_err(|source| PersistError::Io {
            path: target,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(yaml: &str) -> NormalizedItem {
        ol_outline::normalize_item(&serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    // ── render_topic tests ───────────────────────────────────────────

    #[test]
    fn test_render_minimal_topic() {
        let doc = render_topic(&item(r#"{ label: "Start" }"#));
        assert_eq!(doc, "---\nsidebar_label: Start\n---\n\n# Start\n");
    }

    #[test]
    fn test_render_uses_title_over_label() {
        let doc = render_topic(&item(r#"{ label: "Short", title: "Long Title" }"#));
        assert!(doc.contains("sidebar_label: Short\n"));
        assert!(doc.contains("title: Long Title\n"));
        assert!(doc.contains("# Long Title\n"));
    }

    #[test]
    fn test_render_includes_slug_and_id_frontmatter() {
        let doc = render_topic(&item(r#"{ label: "T", slug: "s", id: "i" }"#));
        assert!(doc.contains("slug: s\n"));
        assert!(doc.contains("id: i\n"));
    }

    #[test]
    fn test_render_nested_headings() {
        let doc = render_topic(&item(
            r#"{ label: "T", headings: [{ label: "A", items: ["B"] }, "C"] }"#,
        ));
        assert_eq!(
            doc,
            "---\nsidebar_label: T\n---\n\n# T\n\n## A\n\n### B\n\n## C\n"
        );
    }

    // ── FsTopicPersister tests ───────────────────────────────────────

    #[test]
    fn test_persister_writes_under_docs_root() {
        let temp = tempfile::tempdir().unwrap();
        let persister = FsTopicPersister::new(temp.path().to_path_buf());

        persister
            .save(&item(r#"{ label: "Start" }"#), "docs-a/start")
            .unwrap();

        let written = fs::read_to_string(temp.path().join("docs-a/start.md")).unwrap();
        assert!(written.contains("sidebar_label: Start"));
    }

    #[test]
    fn test_persister_slugifies_directory_but_not_filename() {
        let temp = tempfile::tempdir().unwrap();
        let persister = FsTopicPersister::new(temp.path().to_path_buf());

        persister
            .save(&item(r#"{ label: "Page" }"#), "My Section/page")
            .unwrap();

        assert!(temp.path().join("my-section/page.md").exists());
    }

    #[test]
    fn test_persister_keeps_existing_extension() {
        let temp = tempfile::tempdir().unwrap();
        let persister = FsTopicPersister::new(temp.path().to_path_buf());

        persister
            .save(&item(r#"{ label: "Page" }"#), "page.md")
            .unwrap();

        assert!(temp.path().join("page.md").exists());
        assert!(!temp.path().join("page.md.md").exists());
    }

    #[test]
    fn test_persister_root_level_topic() {
        let temp = tempfile::tempdir().unwrap();
        let persister = FsTopicPersister::new(temp.path().to_path_buf());

        persister.save(&item(r#"{ label: "Top" }"#), "top").unwrap();

        assert!(temp.path().join("top.md").exists());
    }
}
