// src/runner.rs
use std::io::{self, Write};

use tracing::info;

use crate::{
    columns::{classify_columns, MatchColumn},
    config::{consts::HEADER_MARKER, options::{ConvertOptions, TableFormat}},
    error::Result,
    file::{create_output, resolve_out_path},
    header::{locate_header, HeaderRow},
    records::{emit_records, Record},
    season::SeasonPattern,
    table::{read_rows, RecordWriter, Row},
};

/// Everything derived from one input table, before anything is written.
#[derive(Clone, Debug)]
pub struct Conversion {
    pub header: HeaderRow,
    pub columns: Vec<MatchColumn>,
    pub records: Vec<Record>,
    pub rows_scanned: usize,
}

/// Summary of what was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub header_row: usize,
    pub match_columns: usize,
    pub rows_scanned: usize,
    pub records: usize,
}

impl From<&Conversion> for RunSummary {
    fn from(c: &Conversion) -> Self {
        Self {
            header_row: c.header.row_index,
            match_columns: c.columns.len(),
            rows_scanned: c.rows_scanned,
            records: c.records.len(),
        }
    }
}

/// Header → columns → records over an in-memory table.
pub fn transform(rows: &[Row], seasons: &SeasonPattern, default_season: &str) -> Result<Conversion> {
    let header = locate_header(rows, HEADER_MARKER)?;
    let columns = classify_columns(&header.labels, seasons, default_season);

    let data = &rows[header.data_start()..];
    let records = emit_records(data, &columns);

    Ok(Conversion { header, columns, records, rows_scanned: data.len() })
}

/// Read the input named by `options` and transform it. Nothing is written.
pub fn load(options: &ConvertOptions) -> Result<Conversion> {
    let seasons = SeasonPattern::from_options(&options.season)?;
    let rows = read_rows(&options.input, options.table_format())?;
    transform(&rows, &seasons, &options.season.default)
}

pub fn write_records<W: Write>(out: W, records: &[Record], format: TableFormat) -> Result<()> {
    let mut w = RecordWriter::new(out, format)?;
    w.write_all(records)?;
    w.finish()
}

/// Load, then write header + records to `out`.
/// The header row is located before the first byte is written.
pub fn convert<W: Write>(options: &ConvertOptions, out: W) -> Result<RunSummary> {
    let conversion = load(options)?;
    write_records(out, &conversion.records, options.table_format())?;

    let summary = RunSummary::from(&conversion);
    info!(
        input = %options.input.display(),
        header_row = summary.header_row,
        match_columns = summary.match_columns,
        rows = summary.rows_scanned,
        records = summary.records,
        "conversion done"
    );
    Ok(summary)
}

/// Top-level runner: stdout unless `options.out` names a file.
pub fn run(options: &ConvertOptions) -> Result<RunSummary> {
    match &options.out {
        None => {
            let stdout = io::stdout();
            convert(options, stdout.lock())
        }
        Some(hint) => {
            // Load first so a missing header leaves no file behind.
            let conversion = load(options)?;
            let path = resolve_out_path(hint, options.table_format());
            let out = create_output(&path)?;
            write_records(out, &conversion.records, options.table_format())?;
            info!(out = %path.display(), records = conversion.records.len(), "wrote records");
            Ok(RunSummary::from(&conversion))
        }
    }
}
