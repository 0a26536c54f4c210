//! Outline document parsing and normalization for OL.
//!
//! An outline file is a YAML document declaring one or more named sidebars
//! and their nested topic/category/link structure. Input is loosely typed:
//! an item may be a plain string, a single-key shorthand mapping, or a full
//! mapping with `label`, `items`, `headings`, `href` and path properties.
//!
//! This crate turns that input into the canonical [`NormalizedItem`] shape:
//!
//! - [`normalize_item`] converts one raw YAML node, recursively
//! - [`ItemKind`] classifies an item's variant from its shape
//! - [`load_sidebars`] reads and normalizes a whole outline file
//! - [`validate_files`] splits a file set into valid and invalid files
//! - [`extract_markdown_structure`] recovers an outline from a markdown
//!   document (the reverse direction)
//!
//! Normalization is pure and fail-fast: structural violations surface as
//! [`OutlineError`] immediately, with no partial results. Callers that
//! orchestrate whole file sets decide how to degrade.

mod error;
mod item;
mod kind;
mod markdown;
mod sidebars;
mod validate;

pub use error::OutlineError;
pub use item::{NormalizedItem, normalize_item};
pub use kind::ItemKind;
pub use markdown::{extract_markdown_structure, outline_value};
pub use sidebars::{SidebarsFile, load_sidebars, parse_sidebars};
pub use validate::{FileValidation, validate_files};
