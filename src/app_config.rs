use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;

/// Parser configuration module
/// This module holds the literals both dialect parsers key on (furniture
/// prefixes, inline markers, decorative characters) so that host
/// applications can adjust them without touching the parsers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParserConfig {
    /// Prefix of lines that open a "Take N" heading (document furniture)
    #[serde(default = "default_take_marker_prefix")]
    pub take_marker_prefix: String,

    /// First-column marker that opens an alternate-take block
    #[serde(default = "default_alternate_take_marker")]
    pub alternate_take_marker: String,

    /// First-column marker that opens a copier block
    #[serde(default = "default_copier_marker")]
    pub copier_marker: String,

    /// Annotation appended to the take number of an alternate take
    #[serde(default = "default_alternate_take_suffix")]
    pub alternate_take_suffix: String,

    /// Decorative character removed from takebar bodies before splitting
    #[serde(default = "default_decorative_strip_char")]
    pub decorative_strip_char: char,

    /// Decorative character removed from takebar take numbers
    #[serde(default = "default_take_number_strip_char")]
    pub take_number_strip_char: char,

    /// Lines that only carry non-breaking-space artifacts
    #[serde(default = "default_blank_line_placeholders")]
    pub blank_line_placeholders: Vec<String>,

    /// Dialogue text of the row emitted for a take that failed to parse
    #[serde(default = "default_error_sentinel")]
    pub error_sentinel: String,
}

fn default_take_marker_prefix() -> String {
    "Take ".to_string()
}

fn default_alternate_take_marker() -> String {
    "A-TAKE".to_string()
}

fn default_copier_marker() -> String {
    "KOPIERER".to_string()
}

fn default_alternate_take_suffix() -> String {
    "A".to_string()
}

fn default_decorative_strip_char() -> char {
    '`'
}

fn default_take_number_strip_char() -> char {
    '‹'
}

fn default_blank_line_placeholders() -> Vec<String> {
    vec!["\u{a0}".to_string(), "\u{a0} ".to_string()]
}

fn default_error_sentinel() -> String {
    "ERROR".to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            take_marker_prefix: default_take_marker_prefix(),
            alternate_take_marker: default_alternate_take_marker(),
            copier_marker: default_copier_marker(),
            alternate_take_suffix: default_alternate_take_suffix(),
            decorative_strip_char: default_decorative_strip_char(),
            take_number_strip_char: default_take_number_strip_char(),
            blank_line_placeholders: default_blank_line_placeholders(),
            error_sentinel: default_error_sentinel(),
        }
    }
}

impl ParserConfig {
    /// Validate the configuration for required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("take_marker_prefix", &self.take_marker_prefix),
            ("alternate_take_marker", &self.alternate_take_marker),
            ("copier_marker", &self.copier_marker),
            ("alternate_take_suffix", &self.alternate_take_suffix),
            ("error_sentinel", &self.error_sentinel),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(ConfigError::EmptyValue(name));
            }
        }

        Ok(())
    }

    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ParserConfig =
            serde_json::from_str(json).context("Failed to parse parser config JSON")?;
        config.validate().context("Parser config validation failed")?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: ParserConfig = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate().context("Parser config validation failed")?;
        Ok(config)
    }

    /// Whether a raw line is a placeholder-only artifact
    pub fn is_blank_line(&self, line: &str) -> bool {
        line.is_empty() || self.blank_line_placeholders.iter().any(|p| p == line)
    }
}
