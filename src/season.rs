// src/season.rs
// Season fragments embedded in match labels, e.g. "25. 1R" → season 2025, match "1R".

use regex::Regex;

use crate::config::options::SeasonOptions;
use crate::error::{ConvertError, Result};

#[derive(Clone, Debug)]
pub struct SeasonPattern {
    regex: Regex,
    century: String,
}

impl SeasonPattern {
    /// Compile `pattern`; capture group 1 must hold the season digits.
    pub fn new(pattern: &str, century: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ConvertError::SeasonPattern(e.to_string()))?;
        // captures_len() counts the implicit whole-match group
        if regex.captures_len() < 2 {
            return Err(ConvertError::SeasonPattern(format!(
                "'{pattern}' has no capture group for the season"
            )));
        }
        Ok(Self { regex, century: century.to_string() })
    }

    pub fn from_options(opts: &SeasonOptions) -> Result<Self> {
        Self::new(&opts.pattern, &opts.century)
    }

    /// Split a header label into `(season, match_id)` if it carries a season fragment.
    /// Only the first fragment is removed; the remainder is trimmed.
    pub fn split(&self, label: &str) -> Option<(String, String)> {
        let caps = self.regex.captures(label)?;
        let whole = caps.get(0)?;
        let digits = caps.get(1)?.as_str();

        let season = if digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}{}", self.century, digits)
        } else {
            digits.to_string()
        };

        let mut rest = String::with_capacity(label.len());
        rest.push_str(&label[..whole.start()]);
        rest.push_str(&label[whole.end()..]);

        Some((season, rest.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pattern() -> SeasonPattern {
        SeasonPattern::from_options(&SeasonOptions::default()).unwrap()
    }

    #[test]
    fn default_recognizes_current_season_prefix() {
        let p = default_pattern();
        assert_eq!(p.split("25. 1R"), Some(("2025".into(), "1R".into())));
        assert_eq!(p.split("25.플옵"), Some(("2025".into(), "플옵".into())));
    }

    #[test]
    fn label_without_fragment_is_left_alone() {
        let p = default_pattern();
        assert_eq!(p.split("1R"), None);
        assert_eq!(p.split("컵 4강"), None);
        assert_eq!(p.split("10.5R"), None);
        assert_eq!(p.split("3.15. 컵"), None);
        assert_eq!(p.split("24. 1R"), None);
    }

    #[test]
    fn leading_two_digit_pattern_gets_century() {
        let p = SeasonPattern::new(r"^(\d{2})\.\s", "20").unwrap();
        assert_eq!(p.split("24. 플옵"), Some(("2024".into(), "플옵".into())));
        assert_eq!(p.split("10.5R"), None);
    }

    #[test]
    fn only_first_fragment_is_stripped() {
        let p = default_pattern();
        assert_eq!(p.split("25. 10.5R"), Some(("2025".into(), "10.5R".into())));
    }

    #[test]
    fn custom_pattern_with_four_digit_season() {
        let p = SeasonPattern::new(r"^S(\d{4})\s", "20").unwrap();
        assert_eq!(p.split("S2026 컵"), Some(("2026".into(), "컵".into())));
        assert_eq!(p.split("컵"), None);
    }

    #[test]
    fn pattern_needs_a_capture_group() {
        let err = SeasonPattern::new(r"\d{2}\.", "20").unwrap_err();
        assert!(matches!(err, ConvertError::SeasonPattern(_)));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let err = SeasonPattern::new(r"(\d{2}", "20").unwrap_err();
        assert!(matches!(err, ConvertError::SeasonPattern(_)));
    }
}
