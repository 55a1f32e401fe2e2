use std::path::PathBuf;

/// Name of the on-disk site configuration file
pub const CONFIG_FILE: &str = "banana.yml";

pub const POSTS_DIR: &str = "posts";
pub const PAGES_DIR: &str = "pages";
pub const LAYOUTS_DIR: &str = "layouts";
pub const STATIC_DIR: &str = "static";

pub const INDEX_TEMPLATE: &str = "index.tmpl";

/// Suffix shared by layouts and standalone pages
pub const TEMPLATE_EXTENSION: &str = "tmpl";

pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_destination_name() -> &'static str {
    "_build"
}

pub fn default_post_layout() -> String {
    "post".to_string()
}

pub fn default_max_layout_depth() -> usize {
    32
}
