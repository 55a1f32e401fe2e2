use liquid::model::Value;
use liquid::{Object, Template};
use log::debug;

use crate::utils::error::{BananaError, BananaResult};

/// Name of the variable through which each level sees its child's output
pub const CONTENT_VARIABLE: &str = "content";

/// One parsed template of a chain
pub struct ChainLevel {
    pub name: String,
    pub template: Template,
}

/// A whole layout chain, ready to render
///
/// Levels are ordered innermost first. Rendering evaluates each level with
/// the same context; from the second level on, `content` holds the output
/// of the level below, so the root layout produces the outermost markup.
pub struct ComposedTemplate {
    name: String,
    levels: Vec<ChainLevel>,
}

impl ComposedTemplate {
    pub fn new(name: String, levels: Vec<ChainLevel>) -> Self {
        ComposedTemplate { name, levels }
    }

    /// Name of the unit: the file stem of the root template
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every level, innermost first
    pub fn chain(&self) -> Vec<&str> {
        self.levels.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn render(&self, globals: &Object) -> BananaResult<String> {
        let mut globals = globals.clone();
        let mut output = String::new();

        for (depth, level) in self.levels.iter().enumerate() {
            if depth > 0 {
                globals.insert(CONTENT_VARIABLE.into(), Value::scalar(output));
            }

            debug!("Rendering level '{}' of '{}'", level.name, self.name);
            output = level
                .template
                .render(&globals)
                .map_err(|e| BananaError::template(&level.name, e))?;
        }

        Ok(output)
    }
}
