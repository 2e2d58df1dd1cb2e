//! Recursive discovery of template files under the source root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Dependency directory never descended into.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Collect files ending in `.{extension}` under `root`, depth-first in file
/// name order.
///
/// Hidden directories and `node_modules` below the root are pruned; the root
/// itself is always walked. Hidden files are kept. A missing or unreadable
/// root is an error.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{extension}");
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e));
    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(&suffix) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_pruned(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let pruned = name.starts_with('.') || name == DEPENDENCY_DIR;
    if pruned {
        debug!(dir = %entry.path().display(), "skipping directory");
    }
    pruned
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_files_prunes_hidden_and_dependency_dirs() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        for dir in ["components/forms", ".cache", "node_modules/pkg", "views"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for file in [
            "App.vue",
            "main.ts",
            ".Hidden.vue",
            "components/forms/Input.vue",
            "components/Button.vue",
            ".cache/Stale.vue",
            "node_modules/pkg/Dep.vue",
            "views/Home.vue",
            "views/Home.vue.bak",
        ] {
            fs::write(root.join(file), "<template></template>").unwrap();
        }
        let found: Vec<String> = find_files(root, "vue")
            .unwrap()
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            found,
            vec![
                ".Hidden.vue",
                "App.vue",
                "components/Button.vue",
                "components/forms/Input.vue",
                "views/Home.vue",
            ]
        );
    }

    #[test]
    fn test_root_named_like_hidden_dir_is_still_walked() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join(".src");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("A.vue"), "").unwrap();
        assert_eq!(find_files(&root, "vue").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_tree_and_missing_root() {
        let tmp = tempdir().unwrap();
        assert!(find_files(tmp.path(), "vue").unwrap().is_empty());
        assert!(find_files(&tmp.path().join("nope"), "vue").is_err());
    }
}
