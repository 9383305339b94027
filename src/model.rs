use serde::Serialize;

/// One line of the recognizer's per-word TSV output.
///
/// Numeric fields are `None` when the column did not parse as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub block_num: Option<i32>,
    pub line_num: Option<i32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub confidence: Option<i32>,
    pub text: String,
}

/// A recognized word that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub text: String,
    pub left: i32,
    pub top: i32,
    pub height: i32,
    pub confidence: i32,
}

impl WordToken {
    #[must_use]
    pub fn new(text: impl Into<String>, left: i32, top: i32, height: i32, confidence: i32) -> Self {
        Self {
            text: text.into(),
            left,
            top,
            height,
            confidence,
        }
    }
}

/// Words sharing one horizontal text line, ordered left to right.
pub type Row = Vec<WordToken>;

/// Rectangular table with no fully blank column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}
