//! `outline` command: bootstrap outline files from an existing docs tree.
//!
//! The reverse of `build`: walks the docs directory, extracts the
//! structure of each markdown document, and writes one outline file per
//! top-level section. Documents whose structure cannot be determined are
//! skipped with a warning.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde_yaml::{Mapping, Value};

use ol_config::{CONFIG_FILENAME, CliSettings, Config};
use ol_files::slugify;
use ol_outline::{extract_markdown_structure, outline_value};

use crate::error::CliError;
use crate::output::Output;

/// Sidebar label for markdown files at the docs root.
const ROOT_SIDEBAR_LABEL: &str = "Docs";

/// Arguments for the `outline` command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    /// Target directory for generated outline files.
    pub(crate) target_dir: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Docs directory to read markdown documents from.
    #[arg(short, long)]
    pub(crate) docs: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub(crate) config: PathBuf,
}

impl OutlineArgs {
    /// Walk the docs tree and emit one outline file per section.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut config = Config::load_or_default(&self.config);
        config.apply_cli(CliSettings {
            docs_dir: self.docs,
            sidebars_file: None,
            fallback_patterns: None,
        });

        fs::create_dir_all(&self.target_dir)?;

        let mut written = 0usize;
        for section in docs_sections(&config.docs_dir, output)? {
            let content = serde_yaml::to_string(&section.to_document())
                .map_err(ol_outline::OutlineError::from)?;
            let filename = self
                .target_dir
                .join(format!("{}.outline.yaml", slugify(&section.label)));

            fs::write(&filename, content)?;
            output.info(&format!("Wrote {}", filename.display()));
            written += 1;
        }

        if written == 0 {
            output.warning(&format!(
                "No markdown documents found under {}",
                config.docs_dir.display()
            ));
        } else {
            output.success(&format!("Created {written} outline file(s)"));
        }
        Ok(())
    }
}

/// One top-level docs section destined for its own outline file.
struct Section {
    label: String,
    /// `path` property carried by the outline document, when the section
    /// maps to a subdirectory.
    path: Option<String>,
    items: Vec<Value>,
}

impl Section {
    /// Assemble the outline document for this section.
    fn to_document(&self) -> Value {
        let mut sidebar = Mapping::new();
        sidebar.insert("label".into(), self.label.clone().into());
        sidebar.insert("items".into(), Value::Sequence(self.items.clone()));

        let mut document = Mapping::new();
        document.insert(
            "sidebars".into(),
            Value::Sequence(vec![Value::Mapping(sidebar)]),
        );
        if let Some(path) = &self.path {
            document.insert("path".into(), path.clone().into());
        }
        Value::Mapping(document)
    }
}

/// Split the docs root into sections: one per subdirectory, plus one for
/// root-level markdown files.
fn docs_sections(docs_dir: &Path, output: &Output) -> Result<Vec<Section>, CliError> {
    let mut sections = Vec::new();
    let mut root_items = Vec::new();

    for path in sorted_entries(docs_dir)? {
        let Some(name) = entry_name(&path) else {
            continue;
        };

        if path.is_dir() {
            let items = outline_items(&path, output)?;
            if !items.is_empty() {
                sections.push(Section {
                    label: name.clone(),
                    path: Some(name),
                    items,
                });
            }
        } else if is_markdown(&path)
            && let Some(value) = extract_outline(&path, output)
        {
            root_items.push(value);
        }
    }

    if !root_items.is_empty() {
        sections.push(Section {
            label: ROOT_SIDEBAR_LABEL.to_owned(),
            path: None,
            items: root_items,
        });
    }
    Ok(sections)
}

/// Collect outline item values for every document under `dir`,
/// recursively; subdirectories become nested groups.
fn outline_items(dir: &Path, output: &Output) -> Result<Vec<Value>, CliError> {
    let mut items = Vec::new();

    for path in sorted_entries(dir)? {
        let Some(name) = entry_name(&path) else {
            continue;
        };

        if path.is_dir() {
            let children = outline_items(&path, output)?;
            if !children.is_empty() {
                let mut group = Mapping::new();
                group.insert("label".into(), name.into());
                group.insert("items".into(), Value::Sequence(children));
                items.push(Value::Mapping(group));
            }
        } else if is_markdown(&path)
            && let Some(value) = extract_outline(&path, output)
        {
            items.push(value);
        }
    }

    Ok(items)
}

/// Extract one document's outline value, warning and skipping on failure.
fn extract_outline(path: &Path, output: &Output) -> Option<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            output.warning(&format!("Skipping {}: {e}", path.display()));
            return None;
        }
    };

    match extract_markdown_structure(&content) {
        Ok(item) => Some(outline_value(&item)),
        Err(e) => {
            output.warning(&format!("Skipping {}: {e}", path.display()));
            None
        }
    }
}

/// Directory entries sorted by name, hidden entries dropped.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| entry_name(path).is_some())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Visible entry name; `None` for hidden files and non-UTF-8 names.
fn entry_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') {
        return None;
    }
    Some(name.to_owned())
}

/// Whether the path looks like a markdown document.
fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn quiet() -> Output {
        Output::new()
    }

    #[test]
    fn test_docs_sections_split_root_and_subdirs() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("guides")).unwrap();
        fs::write(temp.path().join("guides/setup.md"), "# Setup\n").unwrap();
        fs::write(temp.path().join("welcome.md"), "# Welcome\n").unwrap();

        let sections = docs_sections(temp.path(), &quiet()).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, "guides");
        assert_eq!(sections[0].path.as_deref(), Some("guides"));
        assert_eq!(sections[0].items, vec![Value::String("Setup".to_owned())]);
        assert_eq!(sections[1].label, ROOT_SIDEBAR_LABEL);
        assert_eq!(sections[1].items, vec![Value::String("Welcome".to_owned())]);
    }

    #[test]
    fn test_outline_items_nest_subdirectories() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("advanced")).unwrap();
        fs::write(temp.path().join("advanced/deep.md"), "# Deep\n").unwrap();
        fs::write(temp.path().join("intro.md"), "# Intro\n").unwrap();

        let items = outline_items(temp.path(), &quiet()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].get("label"),
            Some(&Value::String("advanced".to_owned()))
        );
        assert_eq!(
            items[0].get("items"),
            Some(&Value::Sequence(vec![Value::String("Deep".to_owned())]))
        );
        assert_eq!(items[1], Value::String("Intro".to_owned()));
    }

    #[test]
    fn test_untitled_documents_are_skipped() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("no-title.md"), "Just text.\n").unwrap();
        fs::write(temp.path().join("titled.md"), "# Titled\n").unwrap();

        let items = outline_items(temp.path(), &quiet()).unwrap();

        assert_eq!(items, vec![Value::String("Titled".to_owned())]);
    }

    #[test]
    fn test_section_document_shape() {
        let section = Section {
            label: "guides".to_owned(),
            path: Some("guides".to_owned()),
            items: vec![Value::String("Setup".to_owned())],
        };

        let document = section.to_document();

        assert_eq!(
            document.get("path"),
            Some(&Value::String("guides".to_owned()))
        );
        let sidebars = document.get("sidebars").unwrap().as_sequence().unwrap();
        assert_eq!(
            sidebars[0].get("label"),
            Some(&Value::String("guides".to_owned()))
        );
    }
}
