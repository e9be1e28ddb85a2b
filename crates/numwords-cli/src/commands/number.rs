//! Number command implementation.

use crate::cli::NumberArgs;
use crate::error::Result;
use crate::output::Formatter;
use numwords_converter::{LineResult, NumberConverter};

/// Execute the number command.
pub fn execute_number(
    args: NumberArgs,
    converter: &NumberConverter,
    formatter: &Formatter,
) -> Result<()> {
    let result = convert_value(converter, &args.value);
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Convert a value that must be a whole integer.
pub fn convert_value(converter: &NumberConverter, value: &str) -> LineResult {
    LineResult::from_outcome(1, value.trim(), converter.convert_integer(value))
}
