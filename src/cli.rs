// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::consts::{DEFAULT_CENTURY, DEFAULT_INPUT, DEFAULT_SEASON, DEFAULT_SEASON_PATTERN};
use crate::config::options::{ConvertOptions, SeasonOptions, TableFormat};
use crate::runner::{self, RunSummary};

/// Turn a roster attendance sheet into one row per match appearance.
///
/// With no arguments, reads `temp_source.csv` and prints CSV to stdout.
#[derive(Parser, Debug)]
#[command(name = "roster_records", version)]
pub struct Args {
    /// Sheet export to read
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Write to this file (or into this directory) instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// csv | tsv; inferred from the input extension when omitted
    #[arg(long, value_parser = parse_format)]
    pub format: Option<TableFormat>,

    /// Regex locating the season in a match label; group 1 = season digits
    #[arg(long, default_value = DEFAULT_SEASON_PATTERN)]
    pub season_pattern: String,

    /// Season used until a label carries one
    #[arg(long, default_value = DEFAULT_SEASON)]
    pub default_season: String,

    /// Prefix for two-digit seasons
    #[arg(long, default_value = DEFAULT_CENTURY)]
    pub century: String,

    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> ConvertOptions {
        ConvertOptions {
            input: self.input,
            out: self.out,
            format: self.format,
            season: SeasonOptions {
                pattern: self.season_pattern,
                century: self.century,
                default: self.default_season,
            },
        }
    }
}

fn parse_format(s: &str) -> Result<TableFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "csv" => Ok(TableFormat::Csv),
        "tsv" => Ok(TableFormat::Tsv),
        other => Err(format!("Unknown format: {}", other)),
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let options = args.into_options();
    execute(&options, io::stderr().lock())?;
    Ok(())
}

/// Run one conversion. A missing header row is reported on `diag` and is not an
/// error; `None` means nothing was written.
pub fn execute<W: Write>(options: &ConvertOptions, mut diag: W) -> color_eyre::Result<Option<RunSummary>> {
    match runner::run(options) {
        Ok(summary) => Ok(Some(summary)),
        Err(e) if e.is_header_not_found() => {
            writeln!(diag, "Error: {e}")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
