//! Outline parsing and normalization errors.

use std::path::PathBuf;

/// Error raised while parsing or normalizing outline documents.
///
/// Shape violations are raised synchronously from [`normalize_item`]
/// (fail fast, no partial results); file-level variants come from
/// [`load_sidebars`].
///
/// [`normalize_item`]: crate::normalize_item
/// [`load_sidebars`]: crate::load_sidebars
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// The raw node is neither a string nor a mapping.
    #[error("Item must be a string or an object")]
    InvalidShape,

    /// Single-key shorthand used with a value that is not a sequence.
    #[error("Shorthand key {key:?} must map to a sequence of items")]
    ShorthandNotSequence {
        /// The offending shorthand key.
        key: String,
    },

    /// Label missing, not a string, or empty after trimming.
    #[error("Item label is missing or empty (found {found})")]
    InvalidLabel {
        /// Display form of the raw label value.
        found: String,
    },

    /// `items` present but not a sequence.
    #[error("Property `items` of item {label:?} must be a sequence")]
    ItemsNotSequence {
        /// Label of the offending item.
        label: String,
    },

    /// `headings` present but not a sequence.
    #[error("Property `headings` of item {label:?} must be a sequence")]
    HeadingsNotSequence {
        /// Label of the offending item.
        label: String,
    },

    /// `items` and `headings` both present on the same item.
    #[error("Item {label:?} cannot have both `items` and `headings`")]
    ItemsAndHeadings {
        /// Label of the offending item.
        label: String,
    },

    /// Top-level document is not a mapping.
    #[error("{}: outline document must be a mapping", .file.display())]
    NotAMapping {
        /// Path of the offending file.
        file: PathBuf,
    },

    /// `sidebars` key missing or not a sequence.
    #[error("{}: `sidebars` must be a sequence", .file.display())]
    SidebarsNotSequence {
        /// Path of the offending file.
        file: PathBuf,
    },

    /// Markdown document has no determinable title.
    #[error("Unable to determine a title: provide one in frontmatter or as a heading")]
    MissingTitle,

    /// I/O failure reading an outline file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
