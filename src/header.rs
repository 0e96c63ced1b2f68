// src/header.rs
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::table::Row;

/// Located header row. Data rows start right after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderRow {
    pub row_index: usize,
    pub labels: Vec<String>,
}

impl HeaderRow {
    pub fn data_start(&self) -> usize {
        self.row_index + 1
    }
}

/// First row whose first cell, trimmed, equals `marker`.
pub fn locate_header(rows: &[Row], marker: &str) -> Result<HeaderRow> {
    let row_index = rows
        .iter()
        .position(|row| row.first().is_some_and(|c| c.trim() == marker))
        .ok_or_else(|| ConvertError::HeaderNotFound { marker: marker.to_string() })?;

    debug!(row_index, marker, "header row located");
    Ok(HeaderRow { row_index, labels: rows[row_index].clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&[&str]]) -> Vec<Row> {
        lines.iter().map(|l| l.iter().map(|c| c.to_string()).collect()).collect()
    }

    #[test]
    fn finds_first_marker_row_below_preamble() {
        let t = rows(&[
            &["2025 시즌 출석부", ""],
            &[],
            &[" 닉네임 ", "포지션", "25. 1R"],
            &["닉네임", "dup"],
        ]);
        let h = locate_header(&t, "닉네임").unwrap();
        assert_eq!(h.row_index, 2);
        assert_eq!(h.data_start(), 3);
        assert_eq!(h.labels[2], "25. 1R");
    }

    #[test]
    fn marker_must_be_in_first_cell() {
        let t = rows(&[&["이름", "닉네임"], &["a", "b"]]);
        let err = locate_header(&t, "닉네임").unwrap_err();
        assert!(err.is_header_not_found());
    }

    #[test]
    fn empty_table_has_no_header() {
        assert!(locate_header(&[], "닉네임").unwrap_err().is_header_not_found());
    }
}
