//! Input table loading
//!
//! Reads the ZIP, plan and request tables into typed records. Every table has
//! a header row, which is discarded. Each table is read to completion before
//! any computation starts, and the file handle is released when the reader is
//! dropped, including on error.

use crate::app::models::{PlanRecord, ZipRecord};
use crate::app::services::plan_filter::PlanFilter;
use crate::constants::{plan_columns, request_columns, zip_columns};
use crate::{Error, Result};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

#[cfg(test)]
pub mod tests;

/// Load the ZIP code to rate area table
pub fn read_zip_records(path: &Path) -> Result<Vec<ZipRecord>> {
    let records = read_table(path, |record, line| {
        Ok(Some(ZipRecord::new(
            required_field(record, zip_columns::ZIP_CODE, path, line)?,
            required_field(record, zip_columns::STATE, path, line)?,
            record.get(zip_columns::COUNTY_CODE).unwrap_or_default(),
            record.get(zip_columns::NAME).unwrap_or_default(),
            required_field(record, zip_columns::RATE_AREA, path, line)?,
        )))
    })?;

    info!("Loaded {} ZIP rows from {}", records.len(), path.display());
    Ok(records)
}

/// Load the plan rows of the metal level selected by `filter`
///
/// Rows of other metal levels are skipped before their rate is looked at, so
/// a blank or unparseable rate only matters on a row that takes part.
pub fn read_plan_records(path: &Path, filter: &PlanFilter) -> Result<Vec<PlanRecord>> {
    let mut skipped = 0usize;
    let records = read_table(path, |record, line| {
        let metal_level = required_field(record, plan_columns::METAL_LEVEL, path, line)?;
        if !filter.accepts(metal_level) {
            skipped += 1;
            return Ok(None);
        }

        let rate_text = required_field(record, plan_columns::RATE, path, line)?;
        let rate = Decimal::from_str(rate_text.trim()).map_err(|e| {
            Error::csv_parsing(
                path.display().to_string(),
                format!("Invalid rate '{}' on line {}: {}", rate_text, line, e),
                None,
            )
        })?;

        Ok(Some(PlanRecord::new(
            record.get(plan_columns::PLAN_ID).unwrap_or_default(),
            required_field(record, plan_columns::STATE, path, line)?,
            metal_level,
            rate,
            required_field(record, plan_columns::RATE_AREA, path, line)?,
        )))
    })?;

    info!(
        "Loaded {} {} plan rows from {} ({} other rows skipped)",
        records.len(),
        filter.metal_level(),
        path.display(),
        skipped
    );
    Ok(records)
}

/// Load the requested ZIP codes, in file order
///
/// Only the first column is read; any rate already present is ignored and
/// recomputed. ZIP codes are not validated here.
pub fn read_requests(path: &Path) -> Result<Vec<String>> {
    let requests = read_table(path, |record, _line| {
        Ok(Some(
            record
                .get(request_columns::ZIP_CODE)
                .unwrap_or_default()
                .to_string(),
        ))
    })?;

    info!("Loaded {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Read every data row of a headed CSV table through `parse`
///
/// `parse` receives the record and its 1-based line number in the file, and
/// returns `None` for rows that are not kept.
fn read_table<T, F>(path: &Path, mut parse: F) -> Result<Vec<T>>
where
    F: FnMut(&StringRecord, u64) -> Result<Option<T>>,
{
    debug!("Reading table: {}", path.display());

    let file =
        File::open(path).map_err(|e| Error::input_unreadable(path.display().to_string(), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader
        .read_record(&mut record)
        .map_err(|e| read_error(path, e))?
    {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if let Some(row) = parse(&record, line)? {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn required_field<'r>(
    record: &'r StringRecord,
    index: usize,
    path: &Path,
    line: u64,
) -> Result<&'r str> {
    record.get(index).ok_or_else(|| {
        Error::csv_parsing(
            path.display().to_string(),
            format!(
                "Line {} has {} column(s), expected at least {}",
                line,
                record.len(),
                index + 1
            ),
            None,
        )
    })
}

/// I/O failures while reading are unreadable input; anything else is malformed CSV
fn read_error(path: &Path, error: csv::Error) -> Error {
    if error.is_io_error() {
        return Error::input_unreadable(path.display().to_string(), std::io::Error::from(error));
    }

    Error::csv_parsing(
        path.display().to_string(),
        "Failed to read CSV record".to_string(),
        Some(error),
    )
}
