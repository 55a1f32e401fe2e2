use std::path::{Path, PathBuf};

use liquid::Parser;
use log::debug;

use crate::config::Config;
use crate::front_matter::ContentParser;
use crate::layout::renderer::{ChainLevel, ComposedTemplate};
use crate::liquid::{create_parser, TemplateHelpers};
use crate::utils::error::{BananaError, BananaResult};
use crate::utils::path::get_stem;

/// Resolves layout chains into composed templates
///
/// A chain starts at a template file and follows each file's `layout` key
/// until a file declares none. Layout names are looked up in `layouts/`
/// first and then in the site root, which is where the shared
/// `layout.tmpl` lives.
pub struct TemplateResolver {
    config: Config,
    content_parser: ContentParser,
    parser: Parser,
}

impl TemplateResolver {
    pub fn new(
        config: &Config,
        content_parser: ContentParser,
        helpers: &TemplateHelpers,
    ) -> BananaResult<Self> {
        Ok(TemplateResolver {
            config: config.clone(),
            content_parser,
            parser: create_parser(helpers)?,
        })
    }

    /// Map a layout name to its file
    pub fn layout_path(&self, name: &str, referrer: &Path) -> BananaResult<PathBuf> {
        let not_found = || BananaError::LayoutNotFound {
            name: name.to_string(),
            referrer: referrer.to_path_buf(),
        };

        if name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(not_found());
        }

        self.config
            .layout_candidates(name)
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(not_found)
    }

    /// Walk the chain starting at `start` and compose it
    pub fn resolve<P: AsRef<Path>>(&self, start: P) -> BananaResult<ComposedTemplate> {
        let start = start.as_ref();
        if !start.is_file() {
            return Err(BananaError::template(
                start.display().to_string(),
                "template file not found",
            ));
        }

        let mut levels = Vec::new();
        let mut visited: Vec<PathBuf> = Vec::new();
        let mut names: Vec<String> = Vec::new();
        let mut current = start.to_path_buf();

        loop {
            let identity = current.canonicalize().unwrap_or_else(|_| current.clone());
            let name = get_stem(&current);
            names.push(name.clone());

            if visited.contains(&identity) {
                return Err(BananaError::LayoutCycle { chain: names });
            }
            if levels.len() >= self.config.max_layout_depth {
                return Err(BananaError::LayoutChainTooDeep {
                    start: start.to_path_buf(),
                    limit: self.config.max_layout_depth,
                });
            }
            visited.push(identity);

            let parsed = self.content_parser.parse_file(&current)?;
            let template = self
                .parser
                .parse(&parsed.body)
                .map_err(|e| BananaError::template(current.display().to_string(), e))?;
            levels.push(ChainLevel {
                name: name.clone(),
                template,
            });

            match parsed.front_matter.layout() {
                Some(parent) => current = self.layout_path(parent, &current)?,
                None => {
                    debug!("Resolved layout chain {}", names.join(" -> "));
                    return Ok(ComposedTemplate::new(name, levels));
                }
            }
        }
    }
}
