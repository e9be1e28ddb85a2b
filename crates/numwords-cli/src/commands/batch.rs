//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use numwords_converter::{write_csv, BatchProcessor, BatchReport, NumberConverter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tracing::info;

/// Execute the batch command.
pub fn execute_batch(
    args: BatchArgs,
    converter: &NumberConverter,
    formatter: &Formatter,
) -> Result<()> {
    let report = run_batch(&args, converter)?;
    println!("{}", formatter.format_report(&report)?);

    if let Some(csv_path) = &args.csv {
        export_csv(&report, csv_path)?;
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Wrote {} row(s) to {}",
                report.results.len(),
                csv_path.display()
            ))
        );
    }

    Ok(())
}

/// Read the batch input named by `args` and convert it.
pub fn run_batch(args: &BatchArgs, converter: &NumberConverter) -> Result<BatchReport> {
    let processor = BatchProcessor::new(converter.clone());

    let report = if args.stdin {
        processor.process_reader(io::stdin().lock())?
    } else if let Some(path) = &args.file {
        info!("Reading batch input from {}", path.display());
        let file = File::open(path)?;
        processor.process_reader(BufReader::new(file))?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    Ok(report)
}

/// Write the report's rows to a CSV file.
pub fn export_csv(report: &BatchReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(&report.results, BufWriter::new(file))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(file: Option<std::path::PathBuf>) -> BatchArgs {
        BatchArgs {
            file,
            stdin: false,
            csv: None,
        }
    }

    #[test]
    fn test_batch_from_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("lines.txt");
        fs::write(
            &input,
            "The pump is 536 deep underground.\n\nInteractive and printable 10022 ZIP code.\n",
        )
        .unwrap();

        let report = run_batch(&args(Some(input)), &NumberConverter::default()).unwrap();
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.results[1].line, 3);
        assert_eq!(report.results[1].output, "ten thousand and twenty-two");
    }

    #[test]
    fn test_batch_requires_source() {
        let result = run_batch(&args(None), &NumberConverter::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_batch_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = run_batch(
            &args(Some(dir.path().join("absent.txt"))),
            &NumberConverter::default(),
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_export_csv() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("results.csv");
        let report = BatchProcessor::default().process_text("n 8");

        export_csv(&report, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Input,Output\nn 8,eight\n");
    }
}
