pub mod renderer;
pub mod resolver;

pub use renderer::{ComposedTemplate, CONTENT_VARIABLE};
pub use resolver::TemplateResolver;
