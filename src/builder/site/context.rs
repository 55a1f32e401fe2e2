use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::builder::page::{Page, PageKind};
use crate::config::Site;
use crate::utils::error::BananaResult;

/// Site-wide values, captured once per build
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub description: String,
    pub author: String,
    pub time: DateTime<Utc>,
    pub vars: BTreeMap<String, serde_yaml::Value>,
}

impl SiteContext {
    pub fn new(site: Site, time: DateTime<Utc>) -> Self {
        SiteContext {
            title: site.title,
            description: site.description,
            author: site.author,
            time,
            vars: site.vars,
        }
    }
}

/// The template-facing view of one page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageContext {
    pub url: String,
    pub slug: String,
    pub date: Option<DateTime<Utc>>,
    pub title: String,
    pub author: String,
    pub meta: String,
    /// Rendered body: HTML from Markdown for posts, the raw body for pages
    pub content: String,
}

impl PageContext {
    pub fn new(page: &Page, content: String) -> Self {
        let fm = &page.front_matter;
        PageContext {
            url: page.url(),
            slug: page.slug(),
            date: page.date(),
            title: fm.title().to_string(),
            author: fm.author().to_string(),
            meta: fm.meta().to_string(),
            content,
        }
    }
}

/// Everything a template sees: `site`, `page` (nil on the index) and `posts`
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub site: &'a SiteContext,
    pub page: Option<&'a PageContext>,
    pub posts: &'a [PageContext],
}

impl RenderContext<'_> {
    pub fn to_globals(&self) -> BananaResult<liquid::Object> {
        crate::liquid::to_object(self)
    }
}

/// Build the post listing: dated posts only, newest first
///
/// Equal dates keep no particular order, but every post is kept.
pub fn post_listing<'a, I>(posts: I) -> Vec<PageContext>
where
    I: IntoIterator<Item = (&'a Page, &'a PageContext)>,
{
    let mut listing: Vec<PageContext> = posts
        .into_iter()
        .filter(|(page, ctx)| page.kind == PageKind::Post && ctx.date.is_some())
        .map(|(_, ctx)| ctx.clone())
        .collect();

    listing.sort_by(|a, b| b.date.cmp(&a.date));
    listing
}
