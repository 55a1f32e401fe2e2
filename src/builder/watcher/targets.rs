use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults::{LAYOUTS_DIR, PAGES_DIR, POSTS_DIR, STATIC_DIR};
use crate::utils::error::{BananaError, BananaResult};

/// Directories to register with the OS watcher, one by one and non-recursively
///
/// The list is the site root, `layouts/`, and `posts/`, `pages/` and
/// `static/` together with all of their subdirectories. Absent directories
/// are skipped.
pub fn watch_targets(base: &Path) -> BananaResult<Vec<PathBuf>> {
    let mut targets = vec![base.to_path_buf()];

    let layouts = base.join(LAYOUTS_DIR);
    if layouts.is_dir() {
        targets.push(layouts);
    }

    for name in [POSTS_DIR, PAGES_DIR, STATIC_DIR] {
        let root = base.join(name);
        if !root.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| BananaError::watch(format!("{}: {}", root.display(), e)))?;
            if entry.file_type().is_dir() {
                targets.push(entry.into_path());
            }
        }
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_only_site_root_when_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(watch_targets(dir.path()).unwrap(), vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn test_includes_nested_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for sub in ["layouts", "posts", "pages/docs/deep", "static/css", "_build/static", "drafts"] {
            fs::create_dir_all(root.join(sub)).unwrap();
        }
        fs::write(root.join("pages/docs/intro.tmpl"), "hi").unwrap();

        let targets = watch_targets(root).unwrap();
        let expected: Vec<PathBuf> = [
            "",
            "layouts",
            "posts",
            "pages",
            "pages/docs",
            "pages/docs/deep",
            "static",
            "static/css",
        ]
        .iter()
        .map(|sub| if sub.is_empty() { root.to_path_buf() } else { root.join(sub) })
        .collect();

        assert_eq!(targets, expected);
    }

    #[test]
    fn test_layouts_is_not_walked() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("layouts/partials")).unwrap();

        let targets = watch_targets(dir.path()).unwrap();
        assert!(targets.contains(&dir.path().join("layouts")));
        assert!(!targets.contains(&dir.path().join("layouts/partials")));
    }
}
