//! Annotator configuration
//!
//! The rule tables the annotator consults are plain data, so they live in a
//! serde struct that can be overridden from a TOML file. The defaults
//! reproduce the built-in behavior exactly: `Form`/`Rule`/`Article`
//! reference prefixes, the `10b5-1` exception literal, years 1900–2017
//! suppressed, trailing-year lookahead for 2007–2017, and a yellow-on-black
//! highlight span.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inclusive range of calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// Smallest year in the range
    pub min: u32,
    /// Largest year in the range
    pub max: u32,
}

impl YearRange {
    /// Whether `year` falls inside the range (inclusive on both ends)
    pub fn contains(&self, year: u32) -> bool {
        self.min <= year && year <= self.max
    }
}

/// Inline style applied to highlighted tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightStyle {
    /// CSS `background-color` value of the emitted span
    pub background: String,
    /// CSS `color` value of the emitted span
    pub color: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            background: "yellow".to_string(),
            color: "black".to_string(),
        }
    }
}

/// Rule tables consulted by the annotator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Words that exclude an immediately following number at the tokenizer
    /// stage, e.g. the `Form` in "Form 10" (case sensitive, followed by a
    /// single space)
    pub reference_prefixes: Vec<String>,

    /// Lowercased label words that suppress the number they precede
    pub label_words: Vec<String>,

    /// Literal tokens that are never highlighted
    pub exception_tokens: Vec<String>,

    /// Numbers inside this range read as calendar years and are suppressed
    pub year_range: YearRange,

    /// A number immediately followed by a year in this range (optionally
    /// through whitespace and a comma) is excluded at the tokenizer stage
    pub trailing_years: YearRange,

    /// Style of the span wrapped around highlighted tokens
    pub style: HighlightStyle,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            reference_prefixes: vec![
                "Form".to_string(),
                "Rule".to_string(),
                "Article".to_string(),
            ],
            label_words: vec![
                "form".to_string(),
                "rule".to_string(),
                "article".to_string(),
                "item".to_string(),
            ],
            exception_tokens: vec!["10b5-1".to_string()],
            year_range: YearRange {
                min: 1900,
                max: 2017,
            },
            trailing_years: YearRange {
                min: 2007,
                max: 2017,
            },
            style: HighlightStyle::default(),
        }
    }
}

impl AnnotatorConfig {
    /// Parse a config from a TOML string; absent fields keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.year_range.min > self.year_range.max {
            return Err(ConfigError::Invalid(
                "year_range.min > year_range.max".to_string(),
            ));
        }
        if self.trailing_years.min > self.trailing_years.max {
            return Err(ConfigError::Invalid(
                "trailing_years.min > trailing_years.max".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_match_builtins() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.reference_prefixes, ["Form", "Rule", "Article"]);
        assert_eq!(config.label_words, ["form", "rule", "article", "item"]);
        assert_eq!(config.exception_tokens, ["10b5-1"]);
        assert!(config.year_range.contains(1900));
        assert!(config.year_range.contains(2017));
        assert!(!config.year_range.contains(2018));
        assert!(config.trailing_years.contains(2007));
        assert!(!config.trailing_years.contains(2006));
        assert_eq!(config.style.background, "yellow");
        assert_eq!(config.style.color, "black");
    }

    #[test]
    fn partial_toml_overrides_single_fields() {
        let config = AnnotatorConfig::from_toml_str(
            r#"
            [style]
            background = "orange"
            "#,
        )
        .unwrap();
        assert_eq!(config.style.background, "orange");
        assert_eq!(config.style.color, "black");
        // untouched tables keep their defaults
        assert_eq!(config.label_words, ["form", "rule", "article", "item"]);
    }

    #[test]
    fn empty_toml_is_the_default() {
        let config = AnnotatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnnotatorConfig::default());
    }

    #[test]
    fn inverted_year_range_is_rejected() {
        let err = AnnotatorConfig::from_toml_str(
            r#"
            year_range = { min = 2017, max = 1900 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AnnotatorConfig::from_toml_str("style = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        use std::io::Write;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numark.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "label_words = [\"form\", \"item\", \"section\"]").unwrap();
        drop(file);

        let config = AnnotatorConfig::from_file(&path).unwrap();
        assert_eq!(config.label_words, ["form", "item", "section"]);
    }
}
