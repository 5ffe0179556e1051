use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use labelmaker::types::{Doc, LabelRequest, Printer, Result, SizePreset};

#[derive(Parser)]
#[command(
    name = "labelmaker",
    version,
    about = "Generate PDF labels for Dymo and Brother P-touch printers"
)]
struct Cli {
    /// Printer type: dymo or ptouch
    #[arg(value_parser = Printer::from_str, required_unless_present = "batch")]
    printer: Option<Printer>,

    /// Labels to print, one page each
    #[arg(required_unless_present = "batch")]
    labels: Vec<String>,

    /// Font size: S, M, L
    #[arg(short, long, default_value = "M", value_parser = SizePreset::from_str)]
    size: SizePreset,

    /// Output PDF filename
    #[arg(short, long, default_value = "labels.pdf")]
    output: PathBuf,

    /// Read a JSON label request instead of positional arguments
    #[arg(long, conflicts_with_all = ["printer", "labels", "size", "output"])]
    batch: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (printer, labels, size, output) = match cli.batch {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let request = LabelRequest::from_json(&raw)?;
            (
                request.printer,
                request.labels,
                request.size,
                PathBuf::from(request.output),
            )
        }
        None => {
            // clap enforces presence when --batch is absent
            let printer = cli.printer.expect("printer argument is required");
            (printer, cli.labels, cli.size, cli.output)
        }
    };

    let pages = Doc::build(printer, &labels, size, &output)?;
    println!("PDF with {pages} labels generated: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_form_parses() {
        let cli = Cli::parse_from(["labelmaker", "dymo", "Hello", "World", "--size", "L"]);
        assert_eq!(cli.printer, Some(Printer::Dymo));
        assert_eq!(cli.labels, vec!["Hello", "World"]);
        assert_eq!(cli.size, SizePreset::Large);
        assert_eq!(cli.output, PathBuf::from("labels.pdf"));
    }

    #[test]
    fn batch_form_needs_no_positionals() {
        let cli = Cli::parse_from(["labelmaker", "--batch", "run.json"]);
        assert_eq!(cli.batch, Some(PathBuf::from("run.json")));
        assert!(cli.printer.is_none());
        assert!(cli.labels.is_empty());
    }

    #[test]
    fn unknown_printer_is_a_parse_error() {
        assert!(Cli::try_parse_from(["labelmaker", "zebra", "Hello"]).is_err());
    }

    #[test]
    fn missing_labels_is_a_parse_error() {
        assert!(Cli::try_parse_from(["labelmaker", "dymo"]).is_err());
    }
}
