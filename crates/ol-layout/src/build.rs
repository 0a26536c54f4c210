//! Sidebar tree construction.
//!
//! Transforms normalized outline items into the output tree consumed by
//! the sidebars file generator. Categories recurse with an extended
//! parent path, links are emitted verbatim, and topics resolve to an href
//! string while their document is persisted through the injected
//! capability.

use serde::Serialize;

use ol_files::{join_path, slugify};
use ol_outline::{ItemKind, NormalizedItem, OutlineError};

use crate::persister::{PersistError, TopicPersister};

/// Error raised while building sidebar trees.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Outline loading or normalization failure.
    #[error("{0}")]
    Outline(#[from] OutlineError),

    /// Topic persistence failure.
    #[error("{0}")]
    Persist(#[from] PersistError),
}

/// Context threaded through recursive tree building.
pub struct BuildContext<'a> {
    /// Href prefix accumulated from the file and enclosing categories.
    pub parent_path: String,
    /// Capability that persists topic documents.
    pub persister: &'a dyn TopicPersister,
}

impl<'a> BuildContext<'a> {
    /// Create a context rooted at `parent_path`.
    #[must_use]
    pub fn new(parent_path: impl Into<String>, persister: &'a dyn TopicPersister) -> Self {
        Self {
            parent_path: parent_path.into(),
            persister,
        }
    }

    /// Derive the context for a category's children.
    fn child(&self, item: &NormalizedItem) -> Self {
        Self {
            parent_path: join_path(&self.parent_path, item.path.as_deref().unwrap_or("")),
            persister: self.persister,
        }
    }
}

/// Serialized `type` tag of an object-shaped sidebar node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Collapsible group node.
    Category,
    /// External/fixed link node.
    Link,
}

/// Category output node: `{ type: "category", label, items }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryNode {
    /// Always [`NodeType::Category`].
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Display label.
    pub label: String,
    /// Child nodes, in declaration order.
    pub items: Vec<SidebarNode>,
}

/// Link output node: `{ type: "link", label, href, title? }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkNode {
    /// Always [`NodeType::Link`].
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Display label.
    pub label: String,
    /// Link target, copied verbatim.
    pub href: String,
    /// Optional display title; omitted from output when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One node of the built sidebar tree.
///
/// Topics are represented by their resolved href string, not an object;
/// the surrounding site generator uses the string to locate the generated
/// document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Resolved topic href.
    Topic(String),
    /// Category subtree.
    Category(CategoryNode),
    /// Link leaf.
    Link(LinkNode),
}

/// Build output nodes from normalized items.
///
/// Items classified [`ItemKind::InvalidItem`] or [`ItemKind::Unknown`]
/// are dropped silently; the rest map through one exhaustive match.
///
/// # Errors
///
/// Returns [`BuildError`] when persisting a topic document fails.
pub fn build_items(
    items: &[NormalizedItem],
    ctx: &BuildContext<'_>,
) -> Result<Vec<SidebarNode>, BuildError> {
    let mut nodes = Vec::with_capacity(items.len());

    for item in items {
        match item.kind() {
            ItemKind::Category => nodes.push(build_category(item, ctx)?),
            ItemKind::Link => nodes.push(build_link(item)),
            ItemKind::Topic => nodes.push(build_topic(item, ctx)?),
            ItemKind::InvalidItem | ItemKind::Unknown => {}
        }
    }

    Ok(nodes)
}

/// Build a category node, recursing into its children.
fn build_category(
    item: &NormalizedItem,
    ctx: &BuildContext<'_>,
) -> Result<SidebarNode, BuildError> {
    let children = item.items.as_deref().unwrap_or(&[]);
    Ok(SidebarNode::Category(CategoryNode {
        node_type: NodeType::Category,
        label: item.label.clone(),
        items: build_items(children, &ctx.child(item))?,
    }))
}

/// Build a link node; no recursion, no path computation.
fn build_link(item: &NormalizedItem) -> SidebarNode {
    SidebarNode::Link(LinkNode {
        node_type: NodeType::Link,
        label: item.label.clone(),
        href: item.href.clone().unwrap_or_default(),
        title: item.title.clone(),
    })
}

/// Build a topic node: resolve the href, persist the document, emit the
/// href string.
fn build_topic(item: &NormalizedItem, ctx: &BuildContext<'_>) -> Result<SidebarNode, BuildError> {
    let href = topic_href(item, &ctx.parent_path);
    ctx.persister.save(item, &href)?;
    Ok(SidebarNode::Topic(href))
}

/// Resolve a topic's href from its identity and the accumulated path.
///
/// The identifier is the first non-empty of `id`, `slug`, and the
/// slugified label, strictly in that priority order. The href joins the
/// parent path, the item's own `path`, and the identifier, dropping
/// empty segments.
#[must_use]
pub fn topic_href(item: &NormalizedItem, parent_path: &str) -> String {
    let topic_path = join_path(parent_path, item.path.as_deref().unwrap_or(""));

    let identifier = [item.id.as_deref(), item.slug.as_deref()]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .map_or_else(|| slugify(&item.label), ToOwned::to_owned);

    join_path(&topic_path, &identifier)
}
