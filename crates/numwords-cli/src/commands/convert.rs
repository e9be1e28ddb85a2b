//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::Result;
use crate::output::Formatter;
use numwords_converter::{LineResult, NumberConverter};

/// Execute the convert command.
pub fn execute_convert(
    args: ConvertArgs,
    converter: &NumberConverter,
    formatter: &Formatter,
) -> Result<()> {
    let text = args.text.join(" ");
    let result = convert_sentence(converter, &text);
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Convert the first number in a sentence.
pub fn convert_sentence(converter: &NumberConverter, text: &str) -> LineResult {
    LineResult::from_outcome(1, text.trim(), converter.extract_and_convert(text))
}
