//! # classif-cli — CLI Tool for the LGPD Classification Workflow
//!
//! Provides the `classif` command-line interface for the CEJEF software
//! referential, replacing the Python `scripts/apply-lgpd-changes.py` and
//! `scripts/apply-remaining-lgpd.py` pair with a structured Rust
//! implementation.
//!
//! ## Subcommands
//!
//! - `classif apply` — Apply curated classifications to the catalogue file.
//! - `classif list` — List the curated classification entries.
//!
//! ## Output Compatibility
//!
//! The apply output format matches the Python scripts: one French status
//! line per entry, a separator, and a summary naming the saved file. The
//! single-writeback behavior is preserved as well — the catalogue file is
//! rewritten at most once per run, and only when at least one byte changed:
//!
//! ```bash
//! classif apply
//! classif apply --set supplemental --dry-run
//! classif list --set baseline
//! ```

pub mod apply;
pub mod list;

use std::path::{Path, PathBuf};

/// Catalogue location relative to the repository root, matching the
/// Next.js site layout the Python scripts targeted.
pub const CATALOGUE_PATH: &str = "app/data/software-list.ts";

/// Resolve a path that may be relative to the repository root.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `repo_root`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_path_points_into_app_data() {
        assert_eq!(CATALOGUE_PATH, "app/data/software-list.ts");
    }

    #[test]
    fn resolve_path_absolute_path_returned_as_is() {
        let repo_root = Path::new("/some/repo");
        let abs_path = Path::new("/absolute/path/to/software-list.ts");
        let result = resolve_path(abs_path, repo_root);
        assert_eq!(result, PathBuf::from("/absolute/path/to/software-list.ts"));
    }

    #[test]
    fn resolve_path_relative_path_exists_in_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        let repo_root = dir.path();
        std::fs::write(repo_root.join("list.ts"), b"content").unwrap();

        let result = resolve_path(Path::new("list.ts"), repo_root);
        assert_eq!(result, repo_root.join("list.ts"));
        assert!(result.exists());
    }

    #[test]
    fn resolve_path_relative_path_does_not_exist_in_repo_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_path(Path::new("missing.ts"), dir.path());
        // Falls back to the path as-is, relative to CWD.
        assert_eq!(result, PathBuf::from("missing.ts"));
    }

    #[test]
    fn resolve_path_relative_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let repo_root = dir.path();
        let sub = repo_root.join("app").join("data");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("software-list.ts"), b"export const x = [];").unwrap();

        let result = resolve_path(Path::new(CATALOGUE_PATH), repo_root);
        assert_eq!(result, repo_root.join(CATALOGUE_PATH));
    }
}
