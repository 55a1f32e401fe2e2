use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use liquid_core::parser::{FilterArguments, ParameterReflection, ParseFilter};
use liquid_core::{Error as LiquidError, Expression, FilterReflection, Result as LiquidResult};
use liquid_core::{Runtime, Value, ValueView};

use crate::front_matter::types::deserializers::parse_timestamp;

use super::single_argument;

/// Formats a timestamp with a strftime pattern: `{{ page.date | date: "%Y-%m-%d" }}`
#[derive(Debug)]
pub struct DateFilter {
    format: Expression,
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "date")
    }
}

impl liquid_core::Filter for DateFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let format = self.format.evaluate(runtime)?.to_kstr().into_owned();

        if input.is_nil() {
            return Ok(Value::scalar(""));
        }

        let raw = input.to_kstr().into_owned();
        if raw.trim().is_empty() {
            return Ok(Value::scalar(""));
        }

        let date = parse_input(&raw)
            .ok_or_else(|| LiquidError::with_msg(format!("date: invalid timestamp '{}'", raw)))?;

        format_date(&date, &format)
            .map(Value::scalar)
            .ok_or_else(|| LiquidError::with_msg(format!("date: invalid format '{}'", format)))
    }
}

fn parse_input(raw: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(raw).or_else(|| {
        // Liquid's own date scalars display in this form
        DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z")
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    })
}

/// Format a date, returning `None` for patterns chrono cannot render
pub fn format_date(date: &DateTime<Utc>, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Parse filter factory for date
#[derive(Debug, Clone)]
pub struct DateFilterParser;

impl FilterReflection for DateFilterParser {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        "Formats a timestamp according to a strftime format string"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for DateFilterParser {
    fn parse(&self, args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        let format = single_argument(args, "date")?;
        Ok(Box::new(DateFilter { format }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
