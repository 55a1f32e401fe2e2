mod case;
mod date;
mod static_url;
mod strip_html;
mod truncate_words;

use std::collections::BTreeMap;
use std::fmt;

use liquid::ParserBuilder;
use liquid_core::parser::{FilterArguments, ParseFilter};
use liquid_core::{Error as LiquidError, Expression, Result as LiquidResult};

pub use case::{CaseFilter, CaseFilterParser};
pub use date::{format_date, DateFilterParser};
pub use static_url::StaticFilterParser;
pub use strip_html::{strip_html, StripHtmlFilterParser};
pub use truncate_words::{truncate_words, TruncateWordsFilterParser};

/// Helper functions available to every template, keyed by name
///
/// The table is built by the caller and handed to the template resolver;
/// nothing is registered globally.
#[derive(Clone, Default)]
pub struct TemplateHelpers {
    filters: BTreeMap<String, Box<dyn ParseFilter>>,
}

impl TemplateHelpers {
    /// The helper set every site gets: date, lower, upper, static,
    /// stripHtml and truncateWords
    pub fn standard() -> Self {
        let mut helpers = TemplateHelpers::default();
        helpers
            .register(DateFilterParser)
            .register(CaseFilterParser(CaseFilter::Lower))
            .register(CaseFilterParser(CaseFilter::Upper))
            .register(StaticFilterParser)
            .register(StripHtmlFilterParser)
            .register(TruncateWordsFilterParser);
        helpers
    }

    /// Add a helper, replacing any helper already registered under its name
    pub fn register<F: ParseFilter + 'static>(&mut self, filter: F) -> &mut Self {
        let name = filter.reflection().name().to_string();
        self.filters.insert(name, Box::new(filter));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Register every helper on a parser builder
    pub fn apply(&self, mut builder: ParserBuilder) -> ParserBuilder {
        for filter in self.filters.values() {
            builder = builder.filter(filter.clone());
        }
        builder
    }
}

impl fmt::Debug for TemplateHelpers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Take the one positional argument a filter expects
pub(crate) fn single_argument(mut args: FilterArguments, filter: &str) -> LiquidResult<Expression> {
    let first = args
        .positional
        .next()
        .ok_or_else(|| LiquidError::with_msg(format!("{}: missing argument", filter)))?;

    if args.positional.next().is_some() || args.keyword.next().is_some() {
        return Err(LiquidError::with_msg(format!("{}: takes exactly one argument", filter)));
    }

    Ok(first)
}
