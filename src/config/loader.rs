use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::SiteConfig;
use crate::utils::error::{BananaError, BananaResult};

/// Load `banana.yml`
///
/// A missing file, an unreadable file and malformed YAML are all
/// configuration errors.
pub fn load_site_config<P: AsRef<Path>>(path: P) -> BananaResult<SiteConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| BananaError::config(path, format!("cannot read file: {}", e)))?;

    parse_site_config(&content, path)
}

/// Parse the YAML text of a site configuration file
pub fn parse_site_config(content: &str, path: &Path) -> BananaResult<SiteConfig> {
    // An empty document deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(SiteConfig::default());
    }

    let config: SiteConfig = serde_yaml::from_str(content)
        .map_err(|e| BananaError::config(path, format!("malformed YAML: {}", e)))?;

    debug!(
        "Site '{}' with {} custom variable(s)",
        config.site.title,
        config.site.vars.len()
    );
    Ok(config)
}
