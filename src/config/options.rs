// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn ext(&self) -> &'static str {
        match self { TableFormat::Csv => "csv", TableFormat::Tsv => "tsv" }
    }

    pub fn delim(&self) -> u8 {
        match self { TableFormat::Csv => b',', TableFormat::Tsv => b'\t' }
    }

    /// `.tsv` (any case) is tab separated; everything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonOptions {
    pub pattern: String,  // regex, group 1 = season digits
    pub century: String,  // prefix for two-digit seasons
    pub default: String,  // season before any fragment is seen
}

impl Default for SeasonOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_SEASON_PATTERN.to_string(),
            century: DEFAULT_CENTURY.to_string(),
            default: DEFAULT_SEASON.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub out: Option<PathBuf>,        // None → stdout
    pub format: Option<TableFormat>, // None → inferred from input
    pub season: SeasonOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out: None,
            format: None,
            season: SeasonOptions::default(),
        }
    }
}

impl ConvertOptions {
    pub fn with_input(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    /// Explicit format wins; otherwise the input extension decides.
    pub fn table_format(&self) -> TableFormat {
        self.format.unwrap_or_else(|| TableFormat::from_path(&self.input))
    }
}
