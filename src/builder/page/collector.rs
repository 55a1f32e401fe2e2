use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::builder::page::model::{Page, PageKind};
use crate::config::defaults;
use crate::front_matter::ContentParser;
use crate::utils::error::{BananaError, BananaResult};
use crate::utils::path::has_extension;

/// Parse every file directly inside the posts directory
///
/// Hidden files are skipped, as are subdirectories. Any parse failure aborts
/// the whole collection.
pub fn collect_posts(parser: &ContentParser, posts_dir: &Path) -> BananaResult<Vec<Page>> {
    if !posts_dir.is_dir() {
        warn!("No posts directory at {}", posts_dir.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(posts_dir)
        .map_err(|e| BananaError::parse(posts_dir, format!("cannot list posts: {}", e)))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BananaError::parse(posts_dir, e))?;
        let path = entry.path();
        if path.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let posts = paths
        .into_iter()
        .map(|path| {
            let parsed = parser.parse_file(&path)?;
            Ok(Page::new(path, PageKind::Post, parsed))
        })
        .collect::<BananaResult<Vec<_>>>()?;

    debug!("Collected {} post(s) from {}", posts.len(), posts_dir.display());
    Ok(posts)
}

/// Walk the pages directory recursively for template files
pub fn collect_pages(parser: &ContentParser, pages_dir: &Path) -> BananaResult<Vec<Page>> {
    if !pages_dir.is_dir() {
        debug!("No pages directory at {}", pages_dir.display());
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(pages_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| BananaError::parse(pages_dir, e))?;
        let path = entry.path();

        if entry.file_type().is_dir() || !has_extension(path, defaults::TEMPLATE_EXTENSION) {
            continue;
        }

        let parsed = parser.parse_file(path)?;
        pages.push(Page::new(path.to_path_buf(), PageKind::Page, parsed));
    }

    debug!("Collected {} page(s) from {}", pages.len(), pages_dir.display());
    Ok(pages)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_posts() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir_all(posts.join("drafts")).unwrap();
        fs::write(posts.join("b.md"), "---\ntitle: B\n---\nbee").unwrap();
        fs::write(posts.join("a.md"), "no front matter").unwrap();
        fs::write(posts.join(".a.md.swp"), "junk").unwrap();
        fs::write(posts.join("drafts/c.md"), "---\ntitle: C\n---\n").unwrap();

        let collected = collect_posts(&ContentParser::default(), &posts).unwrap();
        let names: Vec<_> = collected.iter().map(|p| p.slug()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(collected.iter().all(|p| p.kind == PageKind::Post));
    }

    #[test]
    fn test_bad_post_aborts_collection() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ok.md"), "---\ntitle: fine\n---\n").unwrap();
        fs::write(dir.path().join("broken.md"), "---\ntitle: never closed\n").unwrap();

        let err = collect_posts(&ContentParser::default(), dir.path()).unwrap_err();
        assert!(matches!(err, BananaError::Parse { .. }));
    }

    #[test]
    fn test_missing_posts_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let collected = collect_posts(&ContentParser::default(), &dir.path().join("posts")).unwrap();
        assert!(collected.is_empty());
    }

    #[test]
    fn test_collect_pages_recursively() {
        let dir = TempDir::new().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(pages.join("nested.tmpl")).unwrap();
        fs::create_dir_all(pages.join("docs")).unwrap();
        fs::write(pages.join("about.tmpl"), "---\ntitle: About\n---\n<p>about</p>").unwrap();
        fs::write(pages.join("docs/guide.tmpl"), "---\ntitle: Guide\n---\n").unwrap();
        fs::write(pages.join("notes.txt"), "not a page").unwrap();

        let collected = collect_pages(&ContentParser::default(), &pages).unwrap();
        let slugs: Vec<_> = collected.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, vec!["about", "guide"]);
        assert!(collected.iter().all(|p| p.kind == PageKind::Page));
    }
}
