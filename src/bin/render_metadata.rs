//! Render configuration metadata documents as a text report.
//!
//! Usage:
//!   render-metadata --format appendix meta/spring-configuration-metadata.json
//!   render-metadata --format console first.json second.json
//!   render-metadata --format appendix < metadata.json
//!
//! Reads one or more metadata JSON documents (files, or stdin when no file is
//! given), folds them into a single catalogue, runs the root-property
//! reconciliation pass, and prints the chosen report on stdout. Advisory
//! messages from reconciliation go to stderr so the report stays clean.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use confmeta::{
    PropertyCatalog, ReportVariant, attach_root_properties, load_metadata_from_path,
    merge_metadata_document, render,
};
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "render-metadata")]
#[command(about = "Render configuration metadata documents as a text report")]
struct Cli {
    /// Report format to produce.
    #[arg(long, value_enum, default_value_t = Format::Console)]
    format: Format,
    /// Metadata JSON documents; reads stdin when omitted.
    files: Vec<PathBuf>,
    /// Suppress reconciliation advisories on stderr.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Appendix,
    Console,
}

impl Format {
    fn variant(self) -> ReportVariant {
        match self {
            Format::Appendix => ReportVariant::Appendix,
            Format::Console => ReportVariant::Console,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = PropertyCatalog::new();
    if cli.files.is_empty() {
        let mut raw = String::new();
        stdin()
            .read_to_string(&mut raw)
            .context("reading metadata document from stdin")?;
        merge_metadata_document(&mut catalog, &raw)?;
    } else {
        for path in &cli.files {
            load_metadata_from_path(&mut catalog, path)?;
        }
    }

    let advisories = attach_root_properties(&mut catalog);
    if !cli.quiet {
        for advisory in &advisories {
            eprintln!("{advisory}");
        }
    }

    let report = render(&catalog, cli.format.variant()).context("rendering report")?;
    print!("{report}");
    Ok(())
}
