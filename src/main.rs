//! tabrow - render delimited tabular text as formatted tables

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tabrow::format::{create_formatter, FormatKind};
use tabrow::model::Decoder;
use tabrow::printer::print_table;
use tabrow::reader::{read_columns_from_path, sniff_header};
use tabrow::ReadOptions;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    Text,
    Csv,
    Html,
}

impl From<CliFormat> for FormatKind {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Text => FormatKind::Text,
            CliFormat::Csv => FormatKind::Csv,
            CliFormat::Html => FormatKind::Html,
        }
    }
}

/// Render delimited tabular text as formatted tables
#[derive(Parser, Debug)]
#[command(name = "tabrow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file; the first line is the header
    file: PathBuf,

    /// Column types in header order, comma-separated (str, int, float).
    /// Defaults to treating every column as text.
    #[arg(short, long, value_delimiter = ',')]
    types: Option<Vec<String>>,

    /// Output dialect
    #[arg(short, long, value_enum, default_value = "text")]
    format: CliFormat,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Upper-case the headings
    #[arg(long)]
    upper: bool,

    /// printf-style format per column, comma-separated (e.g. "%s,%d,%0.2f")
    #[arg(long, value_delimiter = ',')]
    column_format: Vec<String>,

    /// Columns to print, comma-separated (default: all, in header order)
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }
    let opts = ReadOptions::new().with_delimiter(cli.delimiter as u8);

    let decoders: Vec<Decoder> = match &cli.types {
        Some(types) => types
            .iter()
            .map(|t| t.parse().map_err(anyhow::Error::msg))
            .collect::<Result<_>>()?,
        None => {
            let header = sniff_header(&cli.file, &opts)
                .with_context(|| format!("Failed to read {}", cli.file.display()))?;
            vec![Decoder::text(); header.len()]
        }
    };

    let store = read_columns_from_path(&cli.file, &decoders, &opts)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let attrs: Vec<String> = if cli.columns.is_empty() {
        store.names().to_vec()
    } else {
        cli.columns.clone()
    };
    let attr_refs: Vec<&str> = attrs.iter().map(String::as_str).collect();

    let column_formats = if cli.column_format.is_empty() {
        None
    } else {
        Some(cli.column_format.clone())
    };
    let mut formatter = create_formatter(cli.format.into(), column_formats, cli.upper);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_table(store.iter(), &attr_refs, formatter.as_mut(), &mut out)?;
    out.flush()?;

    Ok(())
}
