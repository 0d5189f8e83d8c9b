//! Answer table output
//!
//! Answers are written as a `zipcode,rate` table with one row per request in
//! request order. The same text is echoed to standard output.

use crate::app::models::SlcspResult;
use crate::constants::HEADINGS;
use crate::{Error, Result};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Write answers to the output table, replacing any existing content
pub fn write_results(path: &Path, results: &[SlcspResult]) -> Result<()> {
    let to_error = |e: std::io::Error| Error::output_write_failure(path.display().to_string(), e);

    let file = File::create(path).map_err(to_error)?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(HEADINGS)
        .map_err(|e| to_error(e.into()))?;

    for result in results {
        writer
            .write_record([result.zip_code.as_str(), result.rate_text().as_str()])
            .map_err(|e| to_error(e.into()))?;
    }

    writer.flush().map_err(to_error)?;

    info!("Wrote {} answers to {}", results.len(), path.display());
    Ok(())
}

/// Render answers as the `zipcode,rate` text echoed to standard output
pub fn render_results(results: &[SlcspResult]) -> String {
    let mut output = format!("{},{}\n", HEADINGS[0], HEADINGS[1]);
    for result in results {
        output.push_str(&format!("{},{}\n", result.zip_code, result.rate_text()));
    }
    output
}

/// Read an answer table back as ordered (zipcode, rate) pairs
pub fn read_results(path: &Path) -> Result<Vec<(String, String)>> {
    debug!("Reading answer table: {}", path.display());

    let file =
        File::open(path).map_err(|e| Error::input_unreadable(path.display().to_string(), e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut pairs = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "Failed to read answer row".to_string(),
            Some(e),
        )
    })? {
        pairs.push((
            record.get(0).unwrap_or_default().to_string(),
            record.get(1).unwrap_or_default().to_string(),
        ));
    }

    Ok(pairs)
}
