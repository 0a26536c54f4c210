//! Outline extraction from markdown documents.
//!
//! The reverse of sidebar generation: given an existing markdown document,
//! recover the outline item that would have produced it. Used by the
//! `outline` command to bootstrap outline files from a docs tree.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::error::OutlineError;
use crate::item::NormalizedItem;

/// ATX heading matcher: captures the marker run and the heading text.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#+)[ \t]*(.*?)[ \t]*$").expect("valid heading regex"));

/// One collected heading.
struct Heading {
    level: usize,
    text: String,
}

/// Extract an outline item from markdown content.
///
/// The title comes from the first H1 heading, falling back to the
/// frontmatter `title`/`sidebar_label`. The item label prefers
/// `sidebar_label`, then the frontmatter title, then the document title.
/// Sub-H1 headings become the item's `headings` tree: a heading followed
/// by deeper headings becomes a nested group, a heading without deeper
/// followers stays a leaf.
///
/// # Errors
///
/// Returns [`OutlineError::MissingTitle`] when neither frontmatter nor
/// headings provide a title.
pub fn extract_markdown_structure(markdown: &str) -> Result<NormalizedItem, OutlineError> {
    let (frontmatter, body) = split_frontmatter(markdown);
    let frontmatter = frontmatter
        .map(serde_yaml::from_str::<Mapping>)
        .transpose()?
        .unwrap_or_default();

    let mut headings: VecDeque<Heading> = HEADING_REGEX
        .captures_iter(body)
        .map(|caps| Heading {
            level: caps[1].len(),
            text: caps[2].to_owned(),
        })
        .collect();

    let frontmatter_title = mapping_str(&frontmatter, "title");
    let sidebar_label = mapping_str(&frontmatter, "sidebar_label");

    let h1 = headings
        .iter()
        .find(|h| h.level == 1)
        .map(|h| h.text.clone());
    headings.retain(|h| h.level > 1);

    let title = h1
        .or_else(|| frontmatter_title.clone())
        .or_else(|| sidebar_label.clone())
        .ok_or(OutlineError::MissingTitle)?;

    let label = sidebar_label
        .or_else(|| frontmatter_title.clone())
        .unwrap_or(title);

    let tree = build_heading_tree(&mut headings, 2);

    Ok(NormalizedItem {
        title: frontmatter_title.filter(|t| *t != label),
        slug: mapping_str(&frontmatter, "slug"),
        id: mapping_str(&frontmatter, "id"),
        headings: if tree.is_empty() { None } else { Some(tree) },
        ..NormalizedItem::new(label)
    })
}

/// Convert an outline item back into its YAML value form.
///
/// Items carrying nothing but a label collapse to a plain string, the
/// most compact of the accepted input shapes; everything else becomes a
/// mapping with children converted recursively.
#[must_use]
pub fn outline_value(item: &NormalizedItem) -> Value {
    let label_only = item.items.is_none()
        && item.headings.is_none()
        && item.href.is_none()
        && item.title.is_none()
        && item.path.is_none()
        && item.id.is_none()
        && item.slug.is_none();
    if label_only {
        return Value::String(item.label.clone());
    }

    let mut map = Mapping::new();
    map.insert("label".into(), item.label.clone().into());
    for (key, value) in [
        ("title", &item.title),
        ("href", &item.href),
        ("path", &item.path),
        ("id", &item.id),
        ("slug", &item.slug),
    ] {
        if let Some(value) = value {
            map.insert(key.into(), value.clone().into());
        }
    }
    for (key, children) in [("items", &item.items), ("headings", &item.headings)] {
        if let Some(children) = children {
            let seq: Vec<Value> = children.iter().map(outline_value).collect();
            map.insert(key.into(), Value::Sequence(seq));
        }
    }
    Value::Mapping(map)
}

/// Split a leading `---` frontmatter block from the document body.
fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(after) = content.strip_prefix("---\n") else {
        return (None, content);
    };
    if let Some(end) = after.find("\n---\n") {
        (Some(&after[..end]), &after[end + 5..])
    } else if let Some(block) = after.strip_suffix("\n---") {
        (Some(block), "")
    } else {
        (None, content)
    }
}

/// Consume headings at `level` from the front of the queue, nesting
/// deeper runs under their preceding heading.
fn build_heading_tree(headings: &mut VecDeque<Heading>, level: usize) -> Vec<NormalizedItem> {
    let mut items = Vec::new();

    loop {
        match headings.front() {
            Some(h) if h.level == level => {}
            _ => break,
        }
        let Some(current) = headings.pop_front() else {
            break;
        };

        if headings.front().is_some_and(|next| next.level > level) {
            items.push(NormalizedItem {
                items: Some(build_heading_tree(headings, level + 1)),
                ..NormalizedItem::new(current.text)
            });
        } else {
            items.push(NormalizedItem::new(current.text));
        }
    }

    items
}

/// Read a string value from a frontmatter mapping.
fn mapping_str(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}
