//! Outline file discovery and path utilities for OL.
//!
//! Provides glob-based discovery of outline files with fallback patterns,
//! and the slug/path helpers used when resolving topic hrefs and filesystem
//! target paths.

mod discovery;
mod paths;

pub use discovery::files_from_patterns;
pub use paths::{PathError, ensure_extension, file_name, join_path, path_slugify, slugify};
