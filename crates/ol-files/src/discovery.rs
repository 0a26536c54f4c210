//! Outline file discovery via glob patterns.

use std::path::PathBuf;

use glob::glob;

/// Resolve outline filenames from glob patterns.
///
/// Primary patterns win when they match anything; otherwise the fallback
/// patterns are tried. The two sets are never merged. Results are sorted
/// and deduplicated so downstream iteration is deterministic.
///
/// Discovery never fails: invalid patterns and unreadable directory
/// entries are logged and treated as producing no matches.
#[must_use]
pub fn files_from_patterns(primary: &[String], fallback: &[String]) -> Vec<PathBuf> {
    let files = collect_matches(primary);
    if files.is_empty() {
        collect_matches(fallback)
    } else {
        files
    }
}

/// Collect files matching any of the given patterns.
fn collect_matches(patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = match glob(pattern) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(pattern = %pattern, error = %e, "Invalid glob pattern");
                continue;
            }
        };

        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "Unreadable glob match");
                }
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "sidebars: []\n").unwrap();
        path
    }

    fn pattern(dir: &std::path::Path, glob: &str) -> String {
        format!("{}/{glob}", dir.display())
    }

    #[test]
    fn test_primary_patterns_win_when_non_empty() {
        let temp = tempfile::tempdir().unwrap();
        let a = touch(temp.path(), "a.outline.yaml");
        touch(temp.path(), "fallback/b.yaml");

        let files = files_from_patterns(
            &[pattern(temp.path(), "*.outline.yaml")],
            &[pattern(temp.path(), "fallback/*.yaml")],
        );

        assert_eq!(files, vec![a]);
    }

    #[test]
    fn test_fallback_used_when_primary_empty() {
        let temp = tempfile::tempdir().unwrap();
        let b = touch(temp.path(), "fallback/b.yaml");

        let files = files_from_patterns(
            &[pattern(temp.path(), "*.outline.yaml")],
            &[pattern(temp.path(), "fallback/*.yaml")],
        );

        assert_eq!(files, vec![b]);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let temp = tempfile::tempdir().unwrap();

        let files = files_from_patterns(
            &[pattern(temp.path(), "*.outline.yaml")],
            &[pattern(temp.path(), "fallback/*.yaml")],
        );

        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let a = touch(temp.path(), "a.outline.yaml");

        let files = files_from_patterns(
            &["[".to_owned(), pattern(temp.path(), "*.outline.yaml")],
            &[],
        );

        assert_eq!(files, vec![a]);
    }

    #[test]
    fn test_results_are_sorted_and_deduplicated() {
        let temp = tempfile::tempdir().unwrap();
        let a = touch(temp.path(), "a.outline.yaml");
        let b = touch(temp.path(), "b.outline.yaml");

        let files = files_from_patterns(
            &[
                pattern(temp.path(), "b.outline.yaml"),
                pattern(temp.path(), "*.outline.yaml"),
            ],
            &[],
        );

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_directories_are_not_matched() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("dir.outline.yaml")).unwrap();
        let a = touch(temp.path(), "a.outline.yaml");

        let files = files_from_patterns(&[pattern(temp.path(), "*.outline.yaml")], &[]);

        assert_eq!(files, vec![a]);
    }
}
