use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::front_matter::{FrontMatter, ParsedContent};
use crate::utils::path::get_stem;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid slug pattern"));

/// Where a page came from, which decides how it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A file in `posts/`: Markdown body, rendered through a layout, listed
    Post,
    /// A `.tmpl` file in `pages/`: the body is itself a template
    Page,
}

/// A parsed content file
///
/// Pages are never mutated after parsing; every build parses them again.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub source: PathBuf,
    pub kind: PageKind,
    pub front_matter: FrontMatter,
    pub content: String,
}

impl Page {
    pub fn new(source: PathBuf, kind: PageKind, parsed: ParsedContent) -> Self {
        Page {
            source,
            kind,
            front_matter: parsed.front_matter,
            content: parsed.body,
        }
    }

    /// URL-safe identifier, derived on every call
    ///
    /// A permalink wins, trimmed of surrounding slashes. Otherwise the title
    /// is slugified; a page whose title gives nothing falls back to its file
    /// name so that it never lands on the site index.
    pub fn slug(&self) -> String {
        if let Some(permalink) = self.front_matter.permalink.as_deref() {
            let trimmed = permalink.trim().trim_matches('/');
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }

        let slug = slugify(self.front_matter.title());
        if slug.is_empty() {
            slugify(&get_stem(&self.source))
        } else {
            slug
        }
    }

    pub fn url(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.front_matter.date
    }

    pub fn layout(&self) -> Option<&str> {
        self.front_matter.layout()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Lower-case `text` and collapse every run of non-word characters into one
/// hyphen, dropping hyphens at either end
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(front_matter: FrontMatter) -> Page {
        Page {
            source: PathBuf::from("posts/2021-01-01-draft.md"),
            kind: PageKind::Post,
            front_matter,
            content: String::new(),
        }
    }

    #[test]
    fn test_slug_from_title() {
        let p = page(FrontMatter {
            title: Some("My First Post!".into()),
            ..Default::default()
        });
        assert_eq!(p.slug(), "my-first-post");
        assert_eq!(p.url(), "/my-first-post");
    }

    #[test]
    fn test_slug_from_permalink() {
        let p = page(FrontMatter {
            title: Some(String::new()),
            permalink: Some("/about/".into()),
            ..Default::default()
        });
        assert_eq!(p.slug(), "about");

        let p = page(FrontMatter {
            title: Some("Ignored".into()),
            permalink: Some("/blog/2021/hello/".into()),
            ..Default::default()
        });
        assert_eq!(p.slug(), "blog/2021/hello");
    }

    #[test]
    fn test_slug_falls_back_to_file_name() {
        let p = page(FrontMatter {
            permalink: Some("/".into()),
            ..Default::default()
        });
        assert_eq!(p.slug(), "2021-01-01-draft");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Hello,   World -- again  "), "hello-world-again");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("Ünïcode Títle"), "ünïcode-títle");
        assert_eq!(slugify("!!!"), "");
    }
}
