use std::path::Path;

use csv::WriterBuilder;

use crate::error::TableError;
use crate::model::Grid;

pub(crate) fn write_csv(path: &Path, grid: &Grid, delimiter: u8) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)?;
    for row in &grid.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_csv_to_string(grid: &Grid, delimiter: u8) -> Result<String, TableError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::<u8>::new());
    for row in &grid.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| TableError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes)
        .map_err(|error| TableError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}
