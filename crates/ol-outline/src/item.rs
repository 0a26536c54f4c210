//! Canonical outline item shape and normalization.
//!
//! Raw YAML items arrive in three shapes: a plain string label, a
//! single-key shorthand mapping (`{ "Label": [children] }`), or a full
//! mapping with `label` and optional structural properties. Normalization
//! folds all three into [`NormalizedItem`], recursively, returning new
//! immutable structures and failing fast on shape violations.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::OutlineError;

/// Canonical in-memory representation of one outline item.
///
/// Built once per file load and read-only afterwards. At most one of
/// `items` (category children) and `headings` (topic sub-headings) is
/// present; [`normalize_item`] rejects items carrying both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedItem {
    /// Item label; non-empty after trimming.
    pub label: String,
    /// Child items forming a category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NormalizedItem>>,
    /// Sub-headings of a topic document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<NormalizedItem>>,
    /// Link target; presence makes the item a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Display title (links and generated topic documents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Path segment contributed to descendant hrefs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Explicit topic identifier; wins over `slug` and the label slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Topic identifier fallback, used when `id` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl NormalizedItem {
    /// Create an item carrying only a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Convert a raw YAML node into a [`NormalizedItem`].
///
/// Strings become `{ label }`; a mapping without `label` and with exactly
/// one key whose value is a sequence is rewritten to
/// `{ label: key, items: value }`; full mappings are validated and their
/// `items`/`headings` normalized recursively.
///
/// # Errors
///
/// Returns [`OutlineError`] when the node is neither string nor mapping,
/// the shorthand value is not a sequence, the label is missing/non-string/
/// empty after trimming, `items` or `headings` is present but not a
/// sequence, or both `items` and `headings` are present.
pub fn normalize_item(raw: &Value) -> Result<NormalizedItem, OutlineError> {
    match raw {
        Value::String(s) => Ok(NormalizedItem::new(validated_label(s)?)),
        Value::Mapping(map) => normalize_mapping(raw, map),
        _ => Err(OutlineError::InvalidShape),
    }
}

/// Normalize a mapping-shaped item.
fn normalize_mapping(raw: &Value, map: &Mapping) -> Result<NormalizedItem, OutlineError> {
    // Single-key shorthand: { "Label": [children] }.
    if raw.get("label").is_none()
        && map.len() == 1
        && let Some((key, value)) = map.iter().next()
    {
        let key_label = scalar_key_string(key).ok_or(OutlineError::InvalidShape)?;
        let Value::Sequence(children) = value else {
            return Err(OutlineError::ShorthandNotSequence { key: key_label });
        };

        let items = children
            .iter()
            .map(normalize_item)
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(NormalizedItem {
            label: validated_label(&key_label)?,
            items: Some(items),
            ..NormalizedItem::default()
        });
    }

    let label = match raw.get("label") {
        Some(Value::String(s)) => validated_label(s)?,
        other => {
            return Err(OutlineError::InvalidLabel {
                found: value_repr(other),
            });
        }
    };

    let items = normalized_children(raw.get("items"), &label, ChildProperty::Items)?;
    let headings = normalized_children(raw.get("headings"), &label, ChildProperty::Headings)?;
    if items.is_some() && headings.is_some() {
        return Err(OutlineError::ItemsAndHeadings { label });
    }

    Ok(NormalizedItem {
        label,
        items,
        headings,
        href: string_field(raw, "href"),
        title: string_field(raw, "title"),
        path: string_field(raw, "path"),
        id: string_field(raw, "id"),
        slug: string_field(raw, "slug"),
    })
}

/// Which child-bearing property is being normalized.
#[derive(Clone, Copy)]
enum ChildProperty {
    Items,
    Headings,
}

/// Normalize the `items` or `headings` sequence of an item.
fn normalized_children(
    value: Option<&Value>,
    label: &str,
    property: ChildProperty,
) -> Result<Option<Vec<NormalizedItem>>, OutlineError> {
    match value {
        None => Ok(None),
        Some(Value::Sequence(seq)) => {
            let children = seq
                .iter()
                .map(normalize_item)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(children))
        }
        Some(_) => Err(match property {
            ChildProperty::Items => OutlineError::ItemsNotSequence {
                label: label.to_owned(),
            },
            ChildProperty::Headings => OutlineError::HeadingsNotSequence {
                label: label.to_owned(),
            },
        }),
    }
}

/// Trim and validate a label; empty labels are rejected.
fn validated_label(label: &str) -> Result<String, OutlineError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(OutlineError::InvalidLabel {
            found: value_repr(Some(&Value::String(label.to_owned()))),
        });
    }
    Ok(trimmed.to_owned())
}

/// Read an optional string property; non-string values are ignored.
fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}

/// Coerce a scalar mapping key into its string form.
fn scalar_key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Display form of a raw value for error messages.
fn value_repr(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::String(s)) => format!("{s:?}"),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Sequence(_)) => "a sequence".to_owned(),
        Some(Value::Mapping(_)) => "a mapping".to_owned(),
        Some(Value::Tagged(_)) => "a tagged value".to_owned(),
    }
}
