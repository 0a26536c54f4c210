//! Slug and path helpers.
//!
//! Hrefs and filesystem targets are treated differently: [`join_path`]
//! composes URL-style hrefs without normalizing the segments, while
//! [`path_slugify`] sanitizes the directory portion of a filesystem target.

/// Error for invalid path manipulation arguments.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Extension is empty or contains characters other than alphanumerics and dots.
    #[error("Invalid extension {0:?}: must be non-empty alphanumeric (dots allowed)")]
    InvalidExtension(String),
    /// Extension ends with a dot.
    #[error("Invalid extension {0:?}: must not end with a dot")]
    ExtensionEndsWithDot(String),
}

/// Convert a label into a URL/filesystem-safe slug.
///
/// Lowercases the input, collapses whitespace and underscore runs into a
/// single hyphen, drops any remaining character outside `[a-z0-9-]`,
/// collapses hyphen runs, and trims leading/trailing hyphens.
///
/// A string with no usable characters (punctuation only, etc.) slugifies
/// to the empty string; this is never an error.
#[must_use]
pub fn slugify(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_hyphen = false;

    for ch in lower.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            // Defer the hyphen until the next kept character; this both
            // collapses runs and trims the leading edge.
            pending_hyphen = !slug.is_empty();
        } else if ch.is_ascii_alphanumeric() {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
        // Any other character is dropped without leaving a separator.
    }

    slug
}

/// Join two href segments with `/`, dropping empty segments.
///
/// Performs no normalization of the segments themselves: hrefs keep
/// whatever casing and internal slashes their segments carry.
#[must_use]
pub fn join_path(parent: &str, child: &str) -> String {
    let segments: Vec<&str> = [parent, child]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    segments.join("/")
}

/// Slugify the directory portion of a path, dropping the filename.
///
/// Backslashes are normalized to forward slashes, empty segments are
/// dropped, and each remaining segment is passed through [`slugify`].
/// Applied only to filesystem target paths, never to hrefs.
#[must_use]
pub fn path_slugify(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let directory = match normalized.rsplit_once('/') {
        Some((dir, _file)) => dir,
        None => "",
    };

    directory
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(slugify)
        .collect::<Vec<_>>()
        .join("/")
}

/// Return the filename portion of a slash-separated path.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, file)| file)
}

/// Append `ext` to `path` unless the path already ends with it.
///
/// The extension may be given with or without a leading dot and is trimmed
/// before use.
///
/// # Errors
///
/// Returns [`PathError`] when the trimmed extension is empty, contains
/// characters other than alphanumerics and dots, or ends with a dot.
pub fn ensure_extension(path: &str, ext: &str) -> Result<String, PathError> {
    let trimmed = ext.trim();

    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
    {
        return Err(PathError::InvalidExtension(ext.to_owned()));
    }
    if trimmed.ends_with('.') {
        return Err(PathError::ExtensionEndsWithDot(ext.to_owned()));
    }

    let suffix = if trimmed.starts_with('.') {
        trimmed.to_owned()
    } else {
        format!(".{trimmed}")
    };

    if path.ends_with(&suffix) {
        Ok(path.to_owned())
    } else {
        Ok(format!("{path}{suffix}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── slugify tests ────────────────────────────────────────────────

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("TestString"), "teststring");
    }

    #[test]
    fn test_slugify_replaces_whitespace_with_hyphen() {
        assert_eq!(slugify("Test String"), "test-string");
        assert_eq!(slugify("Test_String"), "test-string");
        assert_eq!(slugify("Test \t String"), "test-string");
    }

    #[test]
    fn test_slugify_collapses_hyphen_runs() {
        assert_eq!(slugify("Test---String"), "test-string");
        assert_eq!(slugify("Test - _ String"), "test-string");
    }

    #[test]
    fn test_slugify_trims_edge_hyphens() {
        assert_eq!(slugify("-Test-"), "test");
        assert_eq!(slugify("_-Test-_"), "test");
        assert_eq!(slugify(" _-Test_- "), "test");
    }

    #[test]
    fn test_slugify_drops_punctuation_without_separator() {
        assert_eq!(slugify("Test.String"), "teststring");
        assert_eq!(slugify("C'est ça"), "cest-a");
    }

    #[test]
    fn test_slugify_degenerate_input_is_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("-_-_-_"), "");
        assert_eq!(slugify("!!!"), "");
    }

    // ── join_path tests ──────────────────────────────────────────────

    #[test]
    fn test_join_path_combines_segments() {
        assert_eq!(join_path("parent", "item"), "parent/item");
    }

    #[test]
    fn test_join_path_drops_empty_segments() {
        assert_eq!(join_path("", "item"), "item");
        assert_eq!(join_path("parent", ""), "parent");
        assert_eq!(join_path("", ""), "");
    }

    #[test]
    fn test_join_path_keeps_segments_verbatim() {
        assert_eq!(join_path("Parent Dir", "a/b"), "Parent Dir/a/b");
    }

    // ── path_slugify tests ───────────────────────────────────────────

    #[test]
    fn test_path_slugify_drops_filename() {
        assert_eq!(path_slugify("Guides/Getting Started/intro.md"), "guides/getting-started");
    }

    #[test]
    fn test_path_slugify_bare_filename_is_empty() {
        assert_eq!(path_slugify("intro.md"), "");
    }

    #[test]
    fn test_path_slugify_normalizes_backslashes() {
        assert_eq!(path_slugify("Docs\\My Section\\page.md"), "docs/my-section");
    }

    #[test]
    fn test_path_slugify_drops_empty_segments() {
        assert_eq!(path_slugify("a//b/c.md"), "a/b");
    }

    // ── file_name tests ──────────────────────────────────────────────

    #[test]
    fn test_file_name_returns_last_segment() {
        assert_eq!(file_name("a/b/c.md"), "c.md");
        assert_eq!(file_name("c.md"), "c.md");
    }

    // ── ensure_extension tests ───────────────────────────────────────

    #[test]
    fn test_ensure_extension_is_idempotent() {
        assert_eq!(ensure_extension("file.md", "md").unwrap(), "file.md");
        assert_eq!(ensure_extension("file", "md").unwrap(), "file.md");
        assert_eq!(ensure_extension("file.md", ".md").unwrap(), "file.md");
    }

    #[test]
    fn test_ensure_extension_handles_nested_paths() {
        assert_eq!(
            ensure_extension("path/to/file", "txt").unwrap(),
            "path/to/file.txt"
        );
        assert_eq!(
            ensure_extension("./path/to/file.txt", ".txt").unwrap(),
            "./path/to/file.txt"
        );
    }

    #[test]
    fn test_ensure_extension_trims_whitespace() {
        assert_eq!(ensure_extension("file", ".md   ").unwrap(), "file.md");
    }

    #[test]
    fn test_ensure_extension_rejects_empty_or_special() {
        assert!(matches!(
            ensure_extension("file", ""),
            Err(PathError::InvalidExtension(_))
        ));
        assert!(matches!(
            ensure_extension("file", "   "),
            Err(PathError::InvalidExtension(_))
        ));
        assert!(matches!(
            ensure_extension("file", "#$%"),
            Err(PathError::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_ensure_extension_rejects_trailing_dot() {
        assert!(matches!(
            ensure_extension("file", "md."),
            Err(PathError::ExtensionEndsWithDot(_))
        ));
        assert!(matches!(
            ensure_extension("file", "."),
            Err(PathError::ExtensionEndsWithDot(_))
        ));
        // Trims to "." which ends with a dot.
        assert!(matches!(
            ensure_extension("file", " ."),
            Err(PathError::ExtensionEndsWithDot(_))
        ));
    }
}
