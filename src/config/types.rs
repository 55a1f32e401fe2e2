use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::utils::path::normalize_path;

/// Site metadata as declared under `site:` in `banana.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Site {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub author: String,

    /// Free-form variables exposed to templates as `site.vars`
    #[serde(default)]
    pub vars: BTreeMap<String, serde_yaml::Value>,
}

/// Shape of the `banana.yml` file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: Site,
}

/// Runtime configuration: where the site lives, where output goes, and
/// the knobs of the build that are not part of `banana.yml`
#[derive(Debug, Clone)]
pub struct Config {
    /// Site root containing `banana.yml`, `posts/`, `layouts/` ...
    pub source: PathBuf,

    /// Output root; removed entirely by `clean`
    pub destination: PathBuf,

    /// Layout used by posts that do not declare one
    pub default_post_layout: String,

    /// Upper bound on the number of templates in one layout chain
    pub max_layout_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_source(defaults::default_source())
    }
}

impl Config {
    /// Configuration rooted at `source` with every other value defaulted
    pub fn for_source<P: Into<PathBuf>>(source: P) -> Self {
        let source = source.into();
        let destination = source.join(defaults::default_destination_name());
        Config {
            source,
            destination,
            default_post_layout: defaults::default_post_layout(),
            max_layout_depth: defaults::default_max_layout_depth(),
        }
    }

    pub fn with_destination<P: Into<PathBuf>>(mut self, destination: P) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source.join(name)
    }

    pub fn config_file(&self) -> PathBuf {
        self.source_path(defaults::CONFIG_FILE)
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.source_path(defaults::POSTS_DIR)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.source_path(defaults::PAGES_DIR)
    }

    pub fn layouts_dir(&self) -> PathBuf {
        self.source_path(defaults::LAYOUTS_DIR)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.source_path(defaults::STATIC_DIR)
    }

    pub fn index_template(&self) -> PathBuf {
        self.source_path(defaults::INDEX_TEMPLATE)
    }

    /// Files a layout name may refer to, in lookup order
    pub fn layout_candidates(&self, name: &str) -> [PathBuf; 2] {
        let file_name = format!("{}.{}", name, defaults::TEMPLATE_EXTENSION);
        [self.layouts_dir().join(&file_name), self.source.join(file_name)]
    }

    /// Where the static tree is mirrored in the output
    pub fn static_output_dir(&self) -> PathBuf {
        self.destination.join(defaults::STATIC_DIR)
    }

    /// Output file for a page with the given slug
    ///
    /// `None` unless the slug is made of plain path segments only; `..`,
    /// roots and drive prefixes would leave the output root.
    pub fn output_path_for_slug(&self, slug: &str) -> Option<PathBuf> {
        let relative = Path::new(slug);
        let plain = !slug.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        plain.then(|| self.destination.join(relative).join("index.html"))
    }

    /// Whether pages under `slug` would be overwritten by the static copy
    pub fn is_reserved_slug(&self, slug: &str) -> bool {
        match Path::new(slug).components().next() {
            Some(Component::Normal(first)) => first == defaults::STATIC_DIR,
            _ => false,
        }
    }

    /// Whether `path` is one of the content directories of the site
    pub fn is_source_dir(&self, path: &Path) -> bool {
        let path = normalize_path(path);
        [
            self.posts_dir(),
            self.pages_dir(),
            self.layouts_dir(),
            self.static_dir(),
        ]
        .iter()
        .any(|dir| normalize_path(dir) == path)
    }
}
