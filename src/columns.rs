// src/columns.rs
// Column classifier: decides which header cells are per-match attendance columns.

use tracing::debug;

use crate::config::consts::{LEADING_COLUMNS, NOISE_LABEL, NON_MATCH_LABELS, STARTER_LABEL};
use crate::season::SeasonPattern;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchColumn {
    pub index: usize,
    pub id: String,
    pub season: String,
}

pub fn is_non_match_label(label: &str) -> bool {
    NON_MATCH_LABELS.contains(&label) || label == NOISE_LABEL
}

/// Index of the first "선발" label; everything from there on is aggregates.
/// Duplicate labels: the first one wins.
pub fn summary_boundary(labels: &[String]) -> Option<usize> {
    labels.iter().position(|l| l.trim() == STARTER_LABEL)
}

/// Classify header cells in column order.
///
/// A season fragment in a label ("25. 1R") sets the current season, which then
/// applies to later labels that carry none. The fragment is read before any
/// skip rule, so a skipped label can still move the season forward.
pub fn classify_columns(labels: &[String], seasons: &SeasonPattern, default_season: &str) -> Vec<MatchColumn> {
    let boundary = summary_boundary(labels);
    let mut current_season = default_season.to_string();
    let mut out = Vec::new();

    for (index, raw) in labels.iter().enumerate() {
        let label = raw.trim();
        if label.is_empty() { continue; }

        let id = match seasons.split(label) {
            Some((season, rest)) => {
                current_season = season;
                rest
            }
            None => label.to_string(),
        };

        if is_non_match_label(label) { continue; }
        if boundary.is_some_and(|b| index >= b) { continue; }
        if index < LEADING_COLUMNS { continue; }

        if id.is_empty() {
            debug!(index, label, "season fragment without match id, skipped");
            continue;
        }

        debug!(index, id = %id, season = %current_season, "match column");
        out.push(MatchColumn { index, id, season: current_season.clone() });
    }

    out
}
