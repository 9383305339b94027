//! Rebuilds tables from OCR word boxes.
//!
//! Words are grouped into rows by vertical position, columns are inferred from
//! the global distribution of left edges, and each word lands in the cell of
//! its nearest column. The pipeline is pure: no I/O, no shared state, and the
//! same input always renders to the same bytes.

mod cells;
mod columns;
mod csv_out;
mod error;
mod grid;
mod model;
mod options;
mod recognizer;
mod render;
mod rows;
mod tsv;
mod warning;
mod word_filter;

use std::path::Path;

use tracing::debug;

use crate::cells::assign_cells;
use crate::columns::infer_columns;
use crate::csv_out::write_csv;
use crate::grid::normalize_grid;
use crate::rows::{average_height, cluster_rows};
use crate::warning::WarningCode;
use crate::word_filter::{filter_tokens, filter_words};

pub use error::TableError;
pub use model::{Grid, RawRecord, Row, WordToken};
pub use options::{
    DEFAULT_COLUMN_GAP_FACTOR, DEFAULT_ROW_TOLERANCE_FACTOR, LayoutMode, OutputFormat,
    ReconstructOptions, RecognizerOptions,
};
pub use recognizer::recognize_tsv;
pub use render::{render, render_markdown};
pub use tsv::{MIN_COLUMNS, ParsedTsv, parse_tsv};
pub use warning::{ExtractWarning, WarningCode as ExtractWarningCode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub records_read: usize,
    pub records_skipped: usize,
    pub words_kept: usize,
    pub words_rejected: usize,
    pub anchor_count: usize,
    pub row_count: usize,
    pub column_count: usize,
    pub columns_dropped: usize,
    pub warnings: Vec<ExtractWarning>,
}

/// Outcome of one reconstruction. `grid` is `None` when no table was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExtraction {
    pub grid: Option<Grid>,
    pub report: ExtractionReport,
}

impl TableExtraction {
    #[must_use]
    pub fn markdown(&self) -> Option<String> {
        self.grid.as_ref().map(render_markdown)
    }

    #[must_use]
    pub fn has_table(&self) -> bool {
        self.grid.is_some()
    }
}

fn no_table(mut report: ExtractionReport, reason: &str) -> TableExtraction {
    debug!(reason, "no table detected");
    report.warnings.push(ExtractWarning::new(
        WarningCode::NoTableDetected,
        format!("no table detected: {reason}"),
    ));
    TableExtraction { grid: None, report }
}

fn reconstruct_filtered(
    words: &[WordToken],
    options: &ReconstructOptions,
    mut report: ExtractionReport,
) -> TableExtraction {
    report.words_kept = words.len();
    if words.is_empty() {
        return no_table(report, "no usable words");
    }

    let avg_height = average_height(words);
    let rows = cluster_rows(words, avg_height * options.row_tolerance_factor);
    let anchors = infer_columns(&rows, avg_height * options.column_gap_factor);
    debug!(
        words = words.len(),
        avg_height,
        rows = rows.len(),
        anchors = anchors.len(),
        "clustered words"
    );

    let cells = assign_cells(&rows, &anchors);
    report.anchor_count = anchors.len();
    let max_cols = cells.iter().map(Vec::len).max().unwrap_or(0);
    if max_cols > anchors.len() {
        debug!(
            max_cols,
            anchors = anchors.len(),
            "rows hold more words than inferred columns"
        );
    }

    let Some(grid) = normalize_grid(&cells, anchors.len(), &mut report.warnings) else {
        return no_table(report, "grid has no rows or columns");
    };

    report.columns_dropped = max_cols - grid.column_count();
    report.row_count = grid.row_count();
    report.column_count = grid.column_count();
    debug!(
        rows = report.row_count,
        columns = report.column_count,
        dropped = report.columns_dropped,
        "normalized grid"
    );

    TableExtraction {
        grid: Some(grid),
        report,
    }
}

/// Reconstructs a table from positioned words. Words with negative confidence,
/// confidence below `options.min_confidence` or blank text are ignored.
#[must_use]
pub fn reconstruct_words(words: &[WordToken], options: &ReconstructOptions) -> TableExtraction {
    let mut report = ExtractionReport::default();
    let kept = filter_tokens(words, options.min_confidence, &mut report.warnings);
    report.words_rejected = words.len() - kept.len();
    reconstruct_filtered(&kept, options, report)
}

/// Reconstructs a table from parsed recognizer records.
#[must_use]
pub fn reconstruct_records(records: &[RawRecord], options: &ReconstructOptions) -> TableExtraction {
    let mut report = ExtractionReport {
        records_read: records.len(),
        ..ExtractionReport::default()
    };
    let words = filter_words(records, options.min_confidence, &mut report.warnings);
    report.words_rejected = records.len() - words.len();
    reconstruct_filtered(&words, options, report)
}

/// Reconstructs a table from the recognizer's TSV output.
#[must_use]
pub fn reconstruct_tsv(input: &str, options: &ReconstructOptions) -> TableExtraction {
    let parsed = parse_tsv(input);
    let mut extraction = reconstruct_records(&parsed.records, options);

    if !parsed.skipped_lines.is_empty() {
        let mut warnings = parsed
            .skipped_lines
            .iter()
            .map(|&line| {
                ExtractWarning::new(
                    WarningCode::MalformedRecord,
                    format!("record has fewer than {MIN_COLUMNS} columns"),
                )
                .with_line(line)
            })
            .collect::<Vec<_>>();
        warnings.append(&mut extraction.report.warnings);
        extraction.report.warnings = warnings;
    }
    extraction.report.records_skipped = parsed.skipped_lines.len();
    extraction.report.records_read += parsed.skipped_lines.len();
    extraction
}

/// Renders the table found in `words` with default options, or `None` when no
/// table is detected.
#[must_use]
pub fn words_to_markdown(words: &[WordToken]) -> Option<String> {
    reconstruct_words(words, &ReconstructOptions::default()).markdown()
}

/// Renders the table found in recognizer TSV with default options, or `None`
/// when no table is detected.
#[must_use]
pub fn tsv_to_markdown(input: &str) -> Option<String> {
    reconstruct_tsv(input, &ReconstructOptions::default()).markdown()
}

/// Reads recognizer TSV from `input_tsv` and writes the rendered table to
/// `output`. Nothing is written when no table is detected.
pub fn extract_tsv_to_file(
    input_tsv: &Path,
    output: &Path,
    format: OutputFormat,
    options: &ReconstructOptions,
) -> Result<ExtractionReport, TableError> {
    options.validate()?;

    let input = std::fs::read_to_string(input_tsv)?;
    let extraction = reconstruct_tsv(&input, options);
    let Some(grid) = &extraction.grid else {
        return Ok(extraction.report);
    };

    write_table(grid, output, format, options.delimiter)?;
    Ok(extraction.report)
}

/// Writes `grid` to `output` in the requested format, ending with a newline.
pub fn write_table(
    grid: &Grid,
    output: &Path,
    format: OutputFormat,
    delimiter: u8,
) -> Result<(), TableError> {
    match format {
        OutputFormat::Csv => write_csv(output, grid, delimiter),
        OutputFormat::Markdown | OutputFormat::Json => {
            let mut rendered = render(grid, format, delimiter)?;
            rendered.push('\n');
            std::fs::write(output, rendered)?;
            Ok(())
        }
    }
}
