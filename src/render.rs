use crate::csv_out::write_csv_to_string;
use crate::error::TableError;
use crate::model::Grid;
use crate::options::OutputFormat;

fn pipe_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}

/// Renders the grid as a pipe table: first row as header, then a `---`
/// separator, then the remaining rows. A single-row grid repeats its row as
/// the body so the table is never body-less.
#[must_use]
pub fn render_markdown(grid: &Grid) -> String {
    let Some(header) = grid.rows.first() else {
        return String::new();
    };
    let body = if grid.rows.len() == 1 {
        &grid.rows[..]
    } else {
        &grid.rows[1..]
    };

    let mut lines = Vec::with_capacity(grid.rows.len() + 2);
    lines.push(pipe_line(header.iter().map(String::as_str)));
    lines.push(pipe_line(header.iter().map(|_| "---")));
    for row in body {
        lines.push(pipe_line(row.iter().map(String::as_str)));
    }

    lines.join("\n").trim_end().to_string()
}

pub fn render(grid: &Grid, format: OutputFormat, delimiter: u8) -> Result<String, TableError> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(grid)),
        OutputFormat::Csv => write_csv_to_string(grid, delimiter),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(grid)?),
    }
}
