pub mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{load_site_config, parse_site_config};
pub use types::*;
pub use validation::{validate_config, validate_destination};
