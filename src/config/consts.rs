// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "temp_source.csv";

// Header row
pub const HEADER_MARKER: &str = "닉네임";
pub const STARTER_LABEL: &str = "선발";

/// Header labels that never describe a match.
pub const NON_MATCH_LABELS: [&str; 9] = [
    "닉네임", "포지션", "선발", "교체", "총합", "골", "도움", "공격포인트", "클린시트",
];
/// Stray weekday label seen in some exports.
pub const NOISE_LABEL: &str = "일요일";

/// Leading columns: name, position.
pub const LEADING_COLUMNS: usize = 2;

// Seasons
pub const DEFAULT_SEASON: &str = "2025";
/// Only the current season's "25." prefix is recognized by default; other years
/// come in through `--season-pattern`, e.g. `^(\d{2})\.\s`.
pub const DEFAULT_SEASON_PATTERN: &str = r"(25)\.";
pub const DEFAULT_CENTURY: &str = "20";

// Cell markers
pub const STARTER_MARKERS: [&str; 3] = ["O", "o", "0"];
pub const SUBSTITUTE_MARKER: &str = "교체";

// Output
pub const OUTPUT_HEADER: [&str; 9] = [
    "season", "matchId", "position", "playerName", "appearanceKind",
    "goals", "assists", "warnings", "sendOffs",
];
