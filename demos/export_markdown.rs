//! Command-line tool exporting a markdown resume or cover letter.
//!
//! Writes a `.docx` package and a printable `.html` page next to each other,
//! named after the document type, job title, company and today's date.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example export_markdown -- resume.md -o out/ \
//!     --doc-type Resume --job "Senior SWE" --company "PAYBACK GmbH"
//! ```
//!
//! Options can also come from a YAML file:
//! ```sh
//! cargo run --example export_markdown -- letter.md -o out/ --config export.yaml
//! ```
//!
//! Set `RUST_LOG=career_export=debug` to see what the exporter does.

use std::fs;
use std::path::PathBuf;

use career_export::{DocumentExporter, ExportOptions};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Export markdown to DOCX and print-ready HTML
#[derive(Parser, Debug)]
#[command(name = "export_markdown", version)]
struct Args {
    /// Markdown file to export
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Document type, first segment of the filename
    #[arg(long, default_value = "Resume")]
    doc_type: String,

    /// Job title
    #[arg(long, default_value = "")]
    job: String,

    /// Company name
    #[arg(long, default_value = "")]
    company: String,

    /// Document title; defaults to the filename
    #[arg(long, default_value = "")]
    title: String,

    /// Which formats to write
    #[arg(long, value_enum, default_value = "both")]
    format: FormatArg,

    /// YAML file with export options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Leave the print toolbar out of the HTML page
    #[arg(long)]
    no_toolbar: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Docx,
    Html,
    Both,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => ExportOptions::from_yaml_str(&fs::read_to_string(path)?)?,
        None => ExportOptions::default(),
    };
    if args.no_toolbar {
        options = options.with_print_toolbar(false);
    }

    let markdown = fs::read_to_string(&args.input)?;
    let exporter = DocumentExporter::with_options(options);
    let base = exporter.filename(&args.doc_type, &args.job, &args.company);

    fs::create_dir_all(&args.output)?;

    let mut results = Vec::new();
    if matches!(args.format, FormatArg::Docx | FormatArg::Both) {
        results.push(exporter.export_docx(&markdown, &base, &args.title)?);
    }
    if matches!(args.format, FormatArg::Html | FormatArg::Both) {
        results.push(exporter.export_html(&markdown, &base, &args.title));
    }

    for result in results {
        let path = args.output.join(&result.suggested_filename);
        fs::write(&path, &result.bytes)?;
        println!("{} ({}, {} bytes)", path.display(), result.media_type, result.bytes.len());
    }

    Ok(())
}
