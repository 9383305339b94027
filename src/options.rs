use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TableError;

pub const DEFAULT_ROW_TOLERANCE_FACTOR: f64 = 0.6;
pub const DEFAULT_COLUMN_GAP_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructOptions {
    /// Multiple of the average word height within which two words share a row.
    pub row_tolerance_factor: f64,
    /// Multiple of the average word height a left-edge gap must exceed to open a column.
    pub column_gap_factor: f64,
    /// Words below this confidence are rejected. Negative confidence is always rejected.
    pub min_confidence: i32,
    pub delimiter: u8,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            row_tolerance_factor: DEFAULT_ROW_TOLERANCE_FACTOR,
            column_gap_factor: DEFAULT_COLUMN_GAP_FACTOR,
            min_confidence: 0,
            delimiter: b',',
        }
    }
}

impl ReconstructOptions {
    pub fn validate(&self) -> Result<(), TableError> {
        if !self.row_tolerance_factor.is_finite() || self.row_tolerance_factor < 0.0 {
            return Err(TableError::InvalidOption(format!(
                "row tolerance factor must be a non-negative number, got {}",
                self.row_tolerance_factor
            )));
        }
        if !self.column_gap_factor.is_finite() || self.column_gap_factor < 0.0 {
            return Err(TableError::InvalidOption(format!(
                "column gap factor must be a non-negative number, got {}",
                self.column_gap_factor
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(TableError::InvalidOption(
                "delimiter must be a single ASCII character".to_string(),
            ));
        }
        Ok(())
    }
}

/// Page segmentation mode handed to the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Auto,
    SingleBlockVertical,
    SingleBlock,
    SparseText,
}

impl LayoutMode {
    #[must_use]
    pub const fn psm(self) -> u8 {
        match self {
            Self::Auto => 3,
            Self::SingleBlockVertical => 5,
            Self::SingleBlock => 6,
            Self::SparseText => 11,
        }
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "3" | "auto" => Ok(Self::Auto),
            "5" | "vertical" | "single-block-vertical" => Ok(Self::SingleBlockVertical),
            "6" | "block" | "single-block" => Ok(Self::SingleBlock),
            "11" | "sparse" | "sparse-text" => Ok(Self::SparseText),
            other => Err(format!(
                "unknown layout mode '{other}', expected auto, vertical, block, sparse or 3/5/6/11"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format '{other}', expected markdown, csv or json"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerOptions {
    pub binary: PathBuf,
    pub language: String,
    pub layout: LayoutMode,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            layout: LayoutMode::SingleBlockVertical,
        }
    }
}
