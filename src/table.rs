// src/table.rs
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::config::consts::OUTPUT_HEADER;
use crate::config::options::TableFormat;
use crate::error::{ConvertError, Result};
use crate::records::Record;

/// One source row, cells as written in the sheet (untrimmed).
pub type Row = Vec<String>;

/* ---------------- Reading ---------------- */

/// Parse delimited text into rows. Ragged rows are kept as-is.
pub fn parse_rows(text: &str, format: TableFormat) -> Result<Vec<Row>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delim())
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Read the whole file into memory, then parse it.
pub fn read_rows(path: &Path, format: TableFormat) -> Result<Vec<Row>> {
    let text = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    parse_rows(&text, format)
}

/* ---------------- Writing ---------------- */

/// Writes the fixed output header on creation, then one line per record.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, format: TableFormat) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(format.delim())
            .from_writer(out);
        inner.write_record(OUTPUT_HEADER)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for r in records {
            self.write(r)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

/// Render header + records to a string (same bytes `RecordWriter` would emit).
pub fn records_to_string(records: &[Record], format: TableFormat) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    let mut w = RecordWriter::new(&mut buf, format)?;
    w.write_all(records)?;
    w.finish()?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_ragged_rows_and_quotes() {
        let text = "a,b,c\n\"x, y\",z\n";
        let rows = parse_rows(text, TableFormat::Csv).unwrap();
        assert_eq!(rows, vec![
            vec!["a".to_string(), "b".into(), "c".into()],
            vec!["x, y".to_string(), "z".into()],
        ]);
    }

    #[test]
    fn parse_strips_bom_and_handles_tabs() {
        let text = "\u{feff}닉네임\t포지션\n김철수\tFW\n";
        let rows = parse_rows(text, TableFormat::Tsv).unwrap();
        assert_eq!(rows[0][0], "닉네임");
        assert_eq!(rows[1], vec!["김철수".to_string(), "FW".into()]);
    }

    #[test]
    fn empty_output_still_has_header() {
        let s = records_to_string(&[], TableFormat::Csv).unwrap();
        assert_eq!(s, "season,matchId,position,playerName,appearanceKind,goals,assists,warnings,sendOffs\n");
    }
}
