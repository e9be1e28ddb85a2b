//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{convert, number};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use numwords_converter::NumberConverter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(converter: &NumberConverter, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Numwords REPL - Type a sentence to convert, 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("numwords> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Number(value)) => {
                        let result = number::convert_value(converter, &value);
                        print_result(formatter, formatter.format_result(&result));
                    }
                    Ok(ReplCommand::Convert(text)) => {
                        let result = convert::convert_sentence(converter, &text);
                        print_result(formatter, formatter.format_result(&result));
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Number(String),
    Convert(String),
}

/// Parse a REPL command line.
///
/// Anything that is not a keyword is treated as a sentence to convert.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "" => Err(CliError::InvalidInput("Empty command".to_string())),
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "number" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: number <integer>".to_string()));
            }
            Ok(ReplCommand::Number(rest.to_string()))
        }
        "convert" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: convert <sentence>".to_string()));
            }
            Ok(ReplCommand::Convert(rest.to_string()))
        }
        _ => Ok(ReplCommand::Convert(line.to_string())),
    }
}

fn print_result(formatter: &Formatter, formatted: Result<String>) {
    match formatted {
        Ok(output) => println!("{}", output),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

/// Get the history file path.
fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".numwords").join("history.txt"))
}

/// Print help message.
fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <sentence>              Convert the first number in the sentence");
    println!("  convert <sentence>      Same as above, even if the sentence starts with a keyword");
    println!("  number <integer>        Convert a single integer, e.g. number -42");
    println!("  help, ?                 Show this help message");
    println!("  exit, quit, q           Exit the REPL");
    println!();
    println!("Examples:");
    println!("  The pump is 536 deep underground.");
    println!("  number 1000001");
    println!();
}
