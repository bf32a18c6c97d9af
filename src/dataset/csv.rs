//! CSV ingestion for user-uploaded point data.

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

use crate::dataset::Point;
use crate::error::{Error, Result};

/// Parse CSV text into 2-D points.
///
/// The first record is treated as a header and discarded without validating
/// column names. Rows where any remaining field fails to parse as a number are
/// dropped silently. When `drop_last_column` is set the trailing field is
/// removed unconditionally, whether or not it looks like a label column.
///
/// Only the first two numeric features become `x` and `y`; extra features are
/// ignored with a warning (no dimensionality reduction is performed).
pub fn parse_points(contents: &str, drop_last_column: bool) -> Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut total_rows = 0usize;
    let mut dropped_rows = 0usize;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for record in reader.records() {
        let record = record?;
        total_rows += 1;

        let mut fields: Vec<&str> = record.iter().collect();
        if drop_last_column && !fields.is_empty() {
            fields.pop();
        }

        match fields
            .iter()
            .map(|f| f.parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()
        {
            Some(values) => rows.push(values),
            None => dropped_rows += 1,
        }
    }

    if total_rows == 0 {
        return Err(Error::EmptyData(
            "CSV must contain a header and at least one data row".to_string(),
        ));
    }
    if rows.is_empty() {
        return Err(Error::InvalidInput(
            "no valid numeric data rows found".to_string(),
        ));
    }
    if dropped_rows > 0 {
        log::debug!(
            "dropped {} of {} data rows containing non-numeric fields",
            dropped_rows,
            total_rows
        );
    }

    let width = rows.iter().map(|r| r.len()).min().unwrap_or(0);
    if width < 2 {
        return Err(Error::InsufficientData(format!(
            "found {} numeric feature(s); at least two are required for 2D visualization",
            width
        )));
    }
    if width > 2 {
        log::warn!(
            "dataset has {} numeric features; plotting only the first two (no dimensionality reduction applied)",
            width
        );
    }

    Ok(rows.into_iter().map(|r| Point::new(r[0], r[1])).collect())
}

/// Read a CSV file from disk and parse it into points.
pub fn read_points_from_path<P: AsRef<Path>>(path: P, drop_last_column: bool) -> Result<Vec<Point>> {
    let contents = fs::read_to_string(path.as_ref()).map_err(Error::Io)?;
    parse_points(&contents, drop_last_column)
}
