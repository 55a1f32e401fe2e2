use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use liquid::model::Value;
use log::{debug, info, warn};

use crate::builder::page::{collect_pages, collect_posts, Page};
use crate::builder::site::context::{post_listing, PageContext, RenderContext, SiteContext};
use crate::builder::types::BuildStats;
use crate::builder::watcher::{watch, watch_targets, Subscription};
use crate::config::{load_site_config, validate_config, validate_destination, Config};
use crate::front_matter::ContentParser;
use crate::layout::{ComposedTemplate, TemplateResolver, CONTENT_VARIABLE};
use crate::liquid::TemplateHelpers;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BananaError, BananaResult};
use crate::utils::fs;

/// Builds a whole site from its source directory
///
/// Every call to `build` starts from scratch: configuration and content are
/// read again and nothing is carried over from a previous build. The first
/// failing step ends the build.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    config: Config,
    content_parser: ContentParser,
    helpers: TemplateHelpers,
    markdown: MarkdownRenderer,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        SiteBuilder {
            config,
            content_parser: ContentParser::default(),
            helpers: TemplateHelpers::standard(),
            markdown: MarkdownRenderer,
        }
    }

    pub fn with_content_parser(mut self, content_parser: ContentParser) -> Self {
        self.content_parser = content_parser;
        self
    }

    pub fn with_helpers(mut self, helpers: TemplateHelpers) -> Self {
        self.helpers = helpers;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a full build
    pub fn build(&self) -> BananaResult<BuildStats> {
        let start = Instant::now();
        let config = &self.config;
        let mut stats = BuildStats::default();

        validate_config(config)?;
        let site_config = load_site_config(config.config_file())?;
        let site = SiteContext::new(site_config.site, Utc::now());
        info!("Building '{}' into {}", site.title, config.destination.display());

        let posts = collect_posts(&self.content_parser, &config.posts_dir())?;
        let post_contexts: Vec<PageContext> = posts
            .iter()
            .map(|post| PageContext::new(post, self.markdown.render(&post.content)))
            .collect();

        let listing = post_listing(posts.iter().zip(post_contexts.iter()));
        for post in posts.iter().filter(|p| p.date().is_none()) {
            warn!("{} has no date and is left out of the post listing", post.source.display());
        }
        stats.listed_posts = listing.len();

        let resolver = TemplateResolver::new(config, self.content_parser.clone(), &self.helpers)?;
        let mut written: HashSet<PathBuf> = HashSet::new();

        let index = resolver.resolve(config.index_template())?;
        let globals = RenderContext {
            site: &site,
            page: None,
            posts: &listing,
        }
        .to_globals()?;
        self.write_rendered(&index, &globals, &config.destination.join("index.html"), &mut written)?;

        for (post, context) in posts.iter().zip(post_contexts.iter()) {
            let layout = post.layout().unwrap_or(config.default_post_layout.as_str());
            let template = resolver.resolve(resolver.layout_path(layout, &post.source)?)?;

            let mut globals = RenderContext {
                site: &site,
                page: Some(context),
                posts: &listing,
            }
            .to_globals()?;
            globals.insert(CONTENT_VARIABLE.into(), Value::scalar(context.content.clone()));

            self.write_page(post, &template, &globals, &mut written)?;
            stats.posts += 1;
        }

        for page in collect_pages(&self.content_parser, &config.pages_dir())? {
            let template = resolver.resolve(&page.source)?;
            let context = PageContext::new(&page, page.content.clone());
            let globals = RenderContext {
                site: &site,
                page: Some(&context),
                posts: &listing,
            }
            .to_globals()?;

            self.write_page(&page, &template, &globals, &mut written)?;
            stats.pages += 1;
        }

        stats.static_bytes = self.sync_static()?;
        stats.duration = start.elapsed();

        info!(
            "Built {} post(s) and {} page(s) in {:.2?}",
            stats.posts, stats.pages, stats.duration
        );
        Ok(stats)
    }

    /// Remove the output root; a missing root is fine
    pub fn clean(&self) -> BananaResult<()> {
        validate_destination(&self.config)?;
        info!("Cleaning {}", self.config.destination.display());
        fs::remove_directory(&self.config.destination)
    }

    /// Rebuild on every relevant change under the site root until the
    /// returned subscription is closed
    pub fn watch(&self) -> BananaResult<Subscription> {
        let source = self
            .config
            .source
            .canonicalize()
            .map_err(|e| BananaError::watch(format!("{}: {}", self.config.source.display(), e)))?;
        let output = self
            .config
            .destination
            .canonicalize()
            .or_else(|_| std::path::absolute(&self.config.destination))
            .map_err(|e| BananaError::watch(format!("{}: {}", self.config.destination.display(), e)))?;

        let directories = watch_targets(&source)?;
        let builder = self.clone();

        watch(&directories, Some(output), move || {
            info!("Change detected. Rebuilding...");
            builder.build()?;
            info!("Rebuild complete");
            Ok(())
        })
    }

    fn write_page(
        &self,
        page: &Page,
        template: &ComposedTemplate,
        globals: &liquid::Object,
        written: &mut HashSet<PathBuf>,
    ) -> BananaResult<()> {
        let slug = page.slug();
        if self.config.is_reserved_slug(&slug) {
            return Err(BananaError::parse(
                &page.source,
                format!("slug '{}' is reserved for static files", slug),
            ));
        }
        let output = self.config.output_path_for_slug(&slug).ok_or_else(|| {
            BananaError::parse(
                &page.source,
                format!("slug '{}' points outside the output root", slug),
            )
        })?;
        debug!("{} -> {}", page.source.display(), output.display());
        self.write_rendered(template, globals, &output, written)
    }

    fn write_rendered(
        &self,
        template: &ComposedTemplate,
        globals: &liquid::Object,
        output: &Path,
        written: &mut HashSet<PathBuf>,
    ) -> BananaResult<()> {
        let html = template.render(globals)?;
        if !written.insert(output.to_path_buf()) {
            warn!("{} is written more than once; the last one wins", output.display());
        }
        fs::write_file(output, html.as_bytes())
    }

    /// Replace the output copy of `static/` with a fresh copy
    fn sync_static(&self) -> BananaResult<u64> {
        let source = self.config.static_dir();
        let target = self.config.static_output_dir();

        if !source.is_dir() {
            debug!("No static directory at {}", source.display());
            fs::remove_directory(&target)?;
            return Ok(0);
        }

        let copied = fs::replace_directory(&source, &target)?;
        debug!("Copied {} byte(s) of static files", copied);
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &str) {
        let path = root.join(path);
        stdfs::create_dir_all(path.parent().unwrap()).unwrap();
        stdfs::write(path, content).unwrap();
    }

    fn sample_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            "banana.yml",
            "site:\n  title: Test Site\n  author: Jo\n  vars:\n    tagline: hello\n",
        );
        write(
            root,
            "layout.tmpl",
            "<html><title>{{ site.title }}</title><body>{{ content }}</body></html>",
        );
        write(
            root,
            "index.tmpl",
            "---\nlayout: layout\n---\n<ul>{% for post in posts %}<li>{{ post.title }} {{ post.date | date: '%Y-%m-%d' }}</li>{% endfor %}</ul>",
        );
        write(
            root,
            "layouts/post.tmpl",
            "---\nlayout: layout\n---\n<article><h1>{{ page.title | upper }}</h1>{{ content }}</article>",
        );
        write(root, "posts/jan.md", "---\ntitle: January\ndate: 2021-01-01\n---\nHello *jan*\n");
        write(root, "posts/jun.md", "---\ntitle: June\ndate: 2021-06-01\n---\nHello jun\n");
        write(root, "posts/dec.md", "---\ntitle: December\ndate: 2020-12-01\n---\nHello dec\n");
        write(
            root,
            "pages/about.tmpl",
            "---\nlayout: layout\ntitle: About Us\npermalink: /about/\n---\n<p>{{ site.vars.tagline }} from {{ page.title }}</p>",
        );
        write(root, "static/css/site.css", "body {}");
        dir
    }

    fn read(path: PathBuf) -> String {
        stdfs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_full_build() {
        let dir = sample_site();
        let builder = SiteBuilder::new(Config::for_source(dir.path()));
        let stats = builder.build().unwrap();
        assert_eq!(stats.posts, 3);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.listed_posts, 3);

        let out = dir.path().join("_build");
        let index = read(out.join("index.html"));
        assert_eq!(
            index,
            "<html><title>Test Site</title><body><ul><li>June 2021-06-01</li><li>January 2021-01-01</li><li>December 2020-12-01</li></ul></body></html>"
        );

        let post = read(out.join("january/index.html"));
        assert!(post.starts_with("<html><title>Test Site</title><body><article><h1>JANUARY</h1>"));
        assert!(post.contains("<em>jan</em>"));

        assert_eq!(
            read(out.join("about/index.html")),
            "<html><title>Test Site</title><body><p>hello from About Us</p></body></html>"
        );
        assert_eq!(read(out.join("static/css/site.css")), "body {}");
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let dir = sample_site();
        let builder = SiteBuilder::new(Config::for_source(dir.path()));
        builder.build().unwrap();
        let first = read(dir.path().join("_build/june/index.html"));
        builder.build().unwrap();
        assert_eq!(first, read(dir.path().join("_build/june/index.html")));
    }

    #[test]
    fn test_static_sync_is_destructive() {
        let dir = sample_site();
        let builder = SiteBuilder::new(Config::for_source(dir.path()));
        builder.build().unwrap();

        stdfs::remove_file(dir.path().join("static/css/site.css")).unwrap();
        write(dir.path(), "static/app.js", "run()");
        builder.build().unwrap();

        let out = dir.path().join("_build/static");
        assert!(!out.join("css/site.css").exists());
        assert_eq!(read(out.join("app.js")), "run()");
    }

    #[test]
    fn test_missing_config_fails_before_output() {
        let dir = sample_site();
        stdfs::remove_file(dir.path().join("banana.yml")).unwrap();

        let err = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap_err();
        assert!(matches!(err, BananaError::Config { .. }));
        assert!(!dir.path().join("_build").exists());
    }

    #[test]
    fn test_bad_post_aborts_build() {
        let dir = sample_site();
        write(dir.path(), "posts/broken.md", "---\ntitle: no end\n");

        let err = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap_err();
        assert!(matches!(err, BananaError::Parse { .. }));
        assert!(!dir.path().join("_build/index.html").exists());
    }

    #[test]
    fn test_layout_cycle_fails_build() {
        let dir = sample_site();
        write(dir.path(), "layouts/post.tmpl", "---\nlayout: wrapper\n---\n{{ content }}");
        write(dir.path(), "layouts/wrapper.tmpl", "---\nlayout: post\n---\n{{ content }}");

        let err = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap_err();
        assert!(matches!(err, BananaError::LayoutCycle { .. }));
    }

    #[test]
    fn test_undated_post_is_rendered_but_not_listed() {
        let dir = sample_site();
        write(dir.path(), "posts/draft.md", "---\ntitle: Draft Idea\n---\nsoon\n");

        let stats = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap();
        assert_eq!(stats.posts, 4);
        assert_eq!(stats.listed_posts, 3);
        assert!(dir.path().join("_build/draft-idea/index.html").is_file());
        assert!(!read(dir.path().join("_build/index.html")).contains("Draft Idea"));
    }

    #[test]
    fn test_permalink_cannot_leave_output_root() {
        let dir = sample_site();
        write(
            dir.path(),
            "pages/evil.tmpl",
            "---\ntitle: Evil\npermalink: /../escaped/\n---\nboo",
        );

        let err = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap_err();
        match err {
            BananaError::Parse { path, message } => {
                assert!(path.ends_with("pages/evil.tmpl"));
                assert!(message.contains("outside the output root"));
            }
            other => panic!("expected a parse error, got {other}"),
        }
        assert!(!dir.path().join("escaped").exists());
    }

    #[test]
    fn test_static_slug_is_reserved() {
        let dir = sample_site();
        write(dir.path(), "posts/static.md", "---\ntitle: Static\ndate: 2021-02-01\n---\ngone?\n");

        let err = SiteBuilder::new(Config::for_source(dir.path())).build().unwrap_err();
        assert!(matches!(err, BananaError::Parse { ref message, .. } if message.contains("reserved")));
        assert!(!dir.path().join("_build/static/index.html").exists());
    }

    #[test]
    fn test_clean_without_output() {
        let dir = sample_site();
        let builder = SiteBuilder::new(Config::for_source(dir.path()));
        builder.clean().unwrap();

        builder.build().unwrap();
        builder.clean().unwrap();
        assert!(!dir.path().join("_build").exists());
        builder.clean().unwrap();
    }
}
