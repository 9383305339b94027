use crate::model::Grid;
use crate::warning::{ExtractWarning, WarningCode};

pub(crate) fn normalize_rows(rows: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut out = row.clone();
            out.resize(width, String::new());
            out
        })
        .collect()
}

fn column_has_content(rows: &[Vec<String>], column: usize) -> bool {
    rows.iter().any(|row| !row[column].trim().is_empty())
}

/// Pads rows to a common width and drops columns that are blank in every row.
///
/// Columns at or past `anchor_count` are the surplus cells of rows holding
/// more words than anchors; they are expected to be blank and go silently.
/// Returns `None` when nothing remains: no rows, or no non-blank column.
pub(crate) fn normalize_grid(
    rows: &[Vec<String>],
    anchor_count: usize,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<Grid> {
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let padded = normalize_rows(rows, max_cols);

    let keep = (0..max_cols)
        .filter(|&column| {
            let keep = column_has_content(&padded, column);
            if !keep && column < anchor_count {
                warnings.push(
                    ExtractWarning::new(WarningCode::BlankColumnDropped, "dropped blank column")
                        .with_column(column),
                );
            }
            keep
        })
        .collect::<Vec<_>>();

    if padded.is_empty() || keep.is_empty() {
        return None;
    }

    let rows = padded
        .iter()
        .map(|row| keep.iter().map(|&column| row[column].clone()).collect())
        .collect();
    Some(Grid { rows })
}
