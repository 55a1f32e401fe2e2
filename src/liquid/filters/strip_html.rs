use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[^>]*>").expect("valid tag pattern"));

/// Remove tag markup from an HTML fragment, keeping the text
pub fn strip_html(fragment: &str) -> String {
    TAG.replace_all(fragment, "").into_owned()
}

#[derive(Debug, Clone)]
pub struct StripHtmlFilter;

impl fmt::Display for StripHtmlFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stripHtml")
    }
}

impl liquid_core::Filter for StripHtmlFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        Ok(Value::scalar(strip_html(&input.to_kstr())))
    }
}

/// Parse filter factory for stripHtml
#[derive(Debug, Clone)]
pub struct StripHtmlFilterParser;

impl FilterReflection for StripHtmlFilterParser {
    fn name(&self) -> &str {
        "stripHtml"
    }

    fn description(&self) -> &str {
        "Removes HTML tags from the input"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for StripHtmlFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(StripHtmlFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
