use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check whether a path carries the given extension (without the dot)
pub fn has_extension<P: AsRef<Path>>(path: P, ext: &str) -> bool {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy() == ext)
        .unwrap_or(false)
}

/// Check whether `path` lies inside `root` once both are normalized
pub fn is_within<P: AsRef<Path>, Q: AsRef<Path>>(path: P, root: Q) -> bool {
    normalize_path(path).starts_with(normalize_path(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./site/../site/posts"), PathBuf::from("site/posts"));
    }

    #[test]
    fn test_get_stem() {
        assert_eq!(get_stem("layouts/post.tmpl"), "post");
        assert_eq!(get_stem(""), "");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("./site/_build/index.html", "site/_build"));
        assert!(!is_within("site/posts/a.md", "site/_build"));
    }
}
