//! Reader for the tab-delimited `signif.txt` export
//!
//! The export has one header row and a fixed column layout; only four
//! columns are read (see the `*_COLUMN` constants). Empty fields are
//! undefined values. Rows without an intensity are dropped, rows without a
//! year are kept.

use crate::core::constants::{INTENSITY_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, YEAR_COLUMN};
use crate::core::geo::LatLng;
use crate::data::catalog::{EventCatalog, QuakeEvent};
use crate::{QuakeError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads and filters the event catalog from a file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<EventCatalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = parse_catalog(BufReader::new(file))?;

    log::info!(
        "Loaded {} events from {} ({} rows without intensity dropped)",
        catalog.len(),
        path.display(),
        catalog.dropped_rows()
    );
    Ok(catalog)
}

/// Parses the catalog from any reader
pub fn parse_catalog<R: Read>(reader: R) -> Result<EventCatalog> {
    let mut csv = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        rows.push(parse_row(&record)?);
    }

    let catalog = EventCatalog::from_unfiltered(rows);
    log::debug!(
        "Parsed {} rows, kept {} with intensity",
        catalog.source_rows(),
        catalog.len()
    );
    Ok(catalog)
}

fn parse_row(record: &StringRecord) -> Result<QuakeEvent> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    let year = field(record, line, YEAR_COLUMN)?;
    let intensity = field(record, line, INTENSITY_COLUMN)?;
    let lat = field(record, line, LATITUDE_COLUMN)?;
    let lng = field(record, line, LONGITUDE_COLUMN)?;

    Ok(QuakeEvent::new(
        Some(year).filter(|y| !y.is_nan()),
        intensity,
        LatLng::new(lat, lng),
    ))
}

/// Reads one numeric column; empty means NaN
fn field(record: &StringRecord, line: u64, column: usize) -> Result<f64> {
    let raw = record
        .get(column)
        .ok_or(QuakeError::MissingColumn { line, column })?
        .trim();

    if raw.is_empty() {
        return Ok(f64::NAN);
    }

    raw.parse::<f64>().map_err(|_| QuakeError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}
