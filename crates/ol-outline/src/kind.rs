//! Item variant classification.
//!
//! The outline format declares no explicit type tag; an item's variant is
//! inferred from its shape. The precedence is load-bearing: a link wins
//! over a category when both `href` and `items` are present, and an empty
//! `items` sequence degrades the item to a topic.

use serde_yaml::Value;

use crate::item::NormalizedItem;

/// Variant of a sidebar item, inferred from its shape.
///
/// `InvalidItem` and `Unknown` exist only during classification; the tree
/// builder filters them out and they never appear in a built tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Item with nested children, rendered as a collapsible group.
    Category,
    /// Leaf item resolving to a generated document.
    Topic,
    /// Leaf item pointing at a fixed href.
    Link,
    /// Not an item at all (scalar, sequence, null).
    InvalidItem,
    /// Mapping without a usable label.
    Unknown,
}

impl ItemKind {
    /// Classify a raw YAML node.
    ///
    /// Evaluated top-down; the first matching rule wins:
    ///
    /// 1. not a mapping → `InvalidItem`
    /// 2. missing/non-string/empty `label` → `Unknown`
    /// 3. non-empty string `href` → `Link`
    /// 4. non-empty `items` sequence → `Category`
    /// 5. otherwise → `Topic`
    #[must_use]
    pub fn classify(raw: &Value) -> Self {
        let Value::Mapping(_) = raw else {
            return Self::InvalidItem;
        };

        match raw.get("label") {
            Some(Value::String(label)) if !label.trim().is_empty() => {}
            _ => return Self::Unknown,
        }

        if let Some(Value::String(href)) = raw.get("href")
            && !href.trim().is_empty()
        {
            return Self::Link;
        }

        if let Some(Value::Sequence(items)) = raw.get("items")
            && !items.is_empty()
        {
            return Self::Category;
        }

        Self::Topic
    }
}

impl NormalizedItem {
    /// Classify this item, applying the [`ItemKind::classify`] precedence
    /// to the typed shape.
    ///
    /// `InvalidItem` is unreachable here: a [`NormalizedItem`] is always
    /// mapping-shaped. `Unknown` only arises for hand-constructed items
    /// with an empty label; [`normalize_item`] never produces one.
    ///
    /// [`normalize_item`]: crate::normalize_item
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        if self.label.trim().is_empty() {
            return ItemKind::Unknown;
        }
        if self.href.as_deref().is_some_and(|h| !h.trim().is_empty()) {
            return ItemKind::Link;
        }
        if self.items.as_deref().is_some_and(|items| !items.is_empty()) {
            return ItemKind::Category;
        }
        ItemKind::Topic
    }
}
