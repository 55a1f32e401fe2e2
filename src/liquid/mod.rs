mod filters;

use liquid::{Parser, ParserBuilder};

use crate::utils::error::{BananaError, BananaResult};

pub use filters::{
    format_date, strip_html, truncate_words, CaseFilter, CaseFilterParser, DateFilterParser,
    StaticFilterParser, StripHtmlFilterParser, TemplateHelpers, TruncateWordsFilterParser,
};

/// Create a Liquid parser with the standard library and the given helpers
///
/// Helpers are registered before the parser exists, so every template it
/// parses can use them.
pub fn create_parser(helpers: &TemplateHelpers) -> BananaResult<Parser> {
    helpers
        .apply(ParserBuilder::with_stdlib())
        .build()
        .map_err(|e| BananaError::template("parser", e))
}

/// Convert any serializable value into a Liquid object
pub fn to_object<T: serde::Serialize>(value: &T) -> BananaResult<liquid::Object> {
    liquid::to_object(value).map_err(|e| BananaError::template("context", e))
}
