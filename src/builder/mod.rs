pub mod page;
pub mod site;
pub mod types;
pub mod watcher;

pub use site::SiteBuilder;
pub use types::BuildStats;
pub use watcher::{watch, watch_targets, Subscription};
