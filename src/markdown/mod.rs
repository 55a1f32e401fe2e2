pub mod engine;

/// Markdown to HTML conversion for post bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn render(&self, source: &str) -> String {
        let options = engine::comrak::create_comrak_options();
        engine::comrak::render_markdown(source, &options)
    }
}
