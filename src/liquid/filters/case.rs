use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{FilterReflection, Result as LiquidResult, Runtime, Value, ValueView};

/// Lower- or upper-cases its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFilter {
    Lower,
    Upper,
}

impl fmt::Display for CaseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseFilter::Lower => write!(f, "lower"),
            CaseFilter::Upper => write!(f, "upper"),
        }
    }
}

impl liquid_core::Filter for CaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        let text = input.to_kstr();
        let folded = match self {
            CaseFilter::Lower => text.to_lowercase(),
            CaseFilter::Upper => text.to_uppercase(),
        };
        Ok(Value::scalar(folded))
    }
}

/// Parse filter factory for `lower` and `upper`
#[derive(Debug, Clone)]
pub struct CaseFilterParser(pub CaseFilter);

impl FilterReflection for CaseFilterParser {
    fn name(&self) -> &str {
        match self.0 {
            CaseFilter::Lower => "lower",
            CaseFilter::Upper => "upper",
        }
    }

    fn description(&self) -> &str {
        "Folds the case of a string"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for CaseFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(self.0))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
