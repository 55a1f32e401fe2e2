use std::fmt;

use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{Error as LiquidError, Expression, FilterReflection, Result as LiquidResult};
use liquid_core::{Runtime, Value, ValueView};

use super::single_argument;

/// First `count` whitespace-delimited words of `text`, joined by single spaces
///
/// Shorter input is returned as far as it goes; nothing is appended.
pub fn truncate_words(count: usize, text: &str) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug)]
pub struct TruncateWordsFilter {
    count: Expression,
}

impl fmt::Display for TruncateWordsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truncateWords")
    }
}

impl liquid_core::Filter for TruncateWordsFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let count = self.count.evaluate(runtime)?;
        let count = count
            .as_scalar()
            .and_then(|s| s.to_integer())
            .ok_or_else(|| LiquidError::with_msg("truncateWords: word count must be an integer"))?;

        let count = usize::try_from(count).unwrap_or(0);
        Ok(Value::scalar(truncate_words(count, &input.to_kstr())))
    }
}

/// Parse filter factory for truncateWords
#[derive(Debug, Clone)]
pub struct TruncateWordsFilterParser;

impl FilterReflection for TruncateWordsFilterParser {
    fn name(&self) -> &str {
        "truncateWords"
    }

    fn description(&self) -> &str {
        "Keeps the first N words of the input"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for TruncateWordsFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let count = single_argument(args, "truncateWords")?;
        Ok(Box::new(TruncateWordsFilter { count }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
