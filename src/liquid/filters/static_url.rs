use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

/// URL prefix under which the static tree is published
pub const STATIC_PREFIX: &str = "/static/";

/// Prefixes an asset path with `/static/`
#[derive(Debug, Clone)]
pub struct StaticFilter;

impl fmt::Display for StaticFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "static")
    }
}

impl liquid_core::Filter for StaticFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        Ok(Value::scalar(format!("{}{}", STATIC_PREFIX, input.to_kstr())))
    }
}

/// Parse filter factory for static
#[derive(Debug, Clone)]
pub struct StaticFilterParser;

impl FilterReflection for StaticFilterParser {
    fn name(&self) -> &str {
        "static"
    }

    fn description(&self) -> &str {
        "Turns a path relative to the static directory into a site URL"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for StaticFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(StaticFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
