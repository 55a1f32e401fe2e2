mod builder;
pub mod context;

pub use builder::SiteBuilder;
pub use context::{post_listing, PageContext, RenderContext, SiteContext};
