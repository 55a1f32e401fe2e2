pub mod parser;
pub mod types;

pub use parser::{ContentParser, FrontMatterFormat, ParsedContent};
pub use types::FrontMatter;
