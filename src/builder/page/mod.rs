mod collector;
mod model;

pub use collector::{collect_pages, collect_posts};
pub use model::{slugify, Page, PageKind};
