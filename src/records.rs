// src/records.rs
// Record emitter: one output record per recognized appearance cell.

use serde::Serialize;
use tracing::trace;

use crate::columns::MatchColumn;
use crate::config::consts::{STARTER_MARKERS, SUBSTITUTE_MARKER};
use crate::table::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AppearanceKind {
    #[serde(rename = "선발")]
    Starter,
    #[serde(rename = "교체")]
    Substitute,
}

impl AppearanceKind {
    /// Map a trimmed attendance cell. Anything unrecognized is not an appearance.
    pub fn from_cell(value: &str) -> Option<Self> {
        if STARTER_MARKERS.contains(&value) {
            Some(AppearanceKind::Starter)
        } else if value == SUBSTITUTE_MARKER {
            Some(AppearanceKind::Substitute)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppearanceKind::Starter => "선발",
            AppearanceKind::Substitute => "교체",
        }
    }
}

/// Field order is the output column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub season: String,
    pub match_id: String,
    pub position: String,
    pub player_name: String,
    #[serde(rename = "appearanceKind")]
    pub appearance: AppearanceKind,
    // Per-match stats are not in the sheet; always zero.
    pub goals: u32,
    pub assists: u32,
    pub warnings: u32,
    pub send_offs: u32,
}

impl Record {
    pub fn new(column: &MatchColumn, position: &str, player_name: &str, kind: AppearanceKind) -> Self {
        Self {
            season: column.season.clone(),
            match_id: column.id.clone(),
            position: position.to_string(),
            player_name: player_name.to_string(),
            appearance: kind,
            goals: 0,
            assists: 0,
            warnings: 0,
            send_offs: 0,
        }
    }
}

/// Walk data rows (everything after the header) in order, columns in order.
pub fn emit_records(rows: &[Row], columns: &[MatchColumn]) -> Vec<Record> {
    let mut out = Vec::new();

    for row in rows {
        if row.len() < 2 { continue; }

        let name = row[0].trim();
        if name.is_empty() { continue; }
        let position = row[1].trim();

        for col in columns {
            let Some(cell) = row.get(col.index) else { continue };
            let value = cell.trim();

            match AppearanceKind::from_cell(value) {
                Some(kind) => {
                    trace!(player = name, match_id = %col.id, kind = kind.label(), "appearance");
                    out.push(Record::new(col, position, name, kind));
                }
                None if !value.is_empty() => {
                    trace!(player = name, column = col.index, value, "unrecognized cell");
                }
                None => {}
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn col(index: usize, id: &str) -> MatchColumn {
        MatchColumn { index, id: id.into(), season: "2025".into() }
    }

    #[test]
    fn markers_map_to_kinds() {
        for m in ["O", "o", "0"] {
            assert_eq!(AppearanceKind::from_cell(m), Some(AppearanceKind::Starter));
        }
        assert_eq!(AppearanceKind::from_cell("교체"), Some(AppearanceKind::Substitute));
        assert_eq!(AppearanceKind::from_cell("X"), None);
        assert_eq!(AppearanceKind::from_cell(""), None);
        assert_eq!(AppearanceKind::from_cell("교체 "), None);
    }

    #[test]
    fn emits_in_row_then_column_order() {
        let rows = vec![
            row(&["A", "FW", "O", "교체"]),
            row(&["B", "DF", "교체", " o "]),
        ];
        let cols = vec![col(2, "1R"), col(3, "2R")];
        let got: Vec<_> = emit_records(&rows, &cols)
            .into_iter()
            .map(|r| (r.player_name, r.match_id, r.appearance))
            .collect();
        assert_eq!(got, vec![
            ("A".into(), "1R".into(), AppearanceKind::Starter),
            ("A".into(), "2R".into(), AppearanceKind::Substitute),
            ("B".into(), "1R".into(), AppearanceKind::Substitute),
            ("B".into(), "2R".into(), AppearanceKind::Starter),
        ]);
    }

    #[test]
    fn empty_name_yields_nothing() {
        let rows = vec![row(&["  ", "FW", "O", "O"])];
        assert!(emit_records(&rows, &[col(2, "1R"), col(3, "2R")]).is_empty());
    }

    #[test]
    fn short_rows_and_unknown_values_are_skipped() {
        let rows = vec![
            row(&["solo"]),
            row(&[]),
            row(&["C", "MF", "X"]),          // unrecognized
            row(&["D", "GK"]),               // column out of bounds
        ];
        assert!(emit_records(&rows, &[col(2, "1R")]).is_empty());
    }

    #[test]
    fn stats_are_zero_and_fields_trimmed() {
        let rows = vec![row(&[" 김철수 ", " FW ", "O"])];
        let recs = emit_records(&rows, &[col(2, "1R")]);
        assert_eq!(recs, vec![Record {
            season: "2025".into(),
            match_id: "1R".into(),
            position: "FW".into(),
            player_name: "김철수".into(),
            appearance: AppearanceKind::Starter,
            goals: 0, assists: 0, warnings: 0, send_offs: 0,
        }]);
    }
}
