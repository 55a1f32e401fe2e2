use comrak::Options;

/// Create default Comrak options with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Post bodies may embed raw HTML
    options.render.unsafe_ = true;

    options.parse.smart = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options<'_>) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options();
        let html = render_markdown("# Hello, World!\n\nThis is a **bold** statement.", &options);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let options = create_comrak_options();
        let html = render_markdown("<div class=\"note\">kept</div>\n", &options);
        assert!(html.contains("<div class=\"note\">kept</div>"));
    }
}
