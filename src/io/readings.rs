//! Fleet table input.
//!
//! Readings arrive as CSV with the header
//! `transformer_id,load_percent,oil_temp_c,rainfall_mm,age_years`.
//! Each row is validated independently: a missing or non-numeric feature
//! value rejects that row with the offending field named, and the rest of
//! the table keeps loading. Rejected rows are returned alongside the valid
//! readings so the caller can report them; they are never zero-filled.

use crate::core::errors::{Error, Result};
use crate::core::{RejectedRow, TransformerReading};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row before validation. Everything is optional text so one bad
/// cell cannot poison the whole file.
#[derive(Debug, Deserialize)]
struct RawRow {
    transformer_id: Option<String>,
    load_percent: Option<String>,
    oil_temp_c: Option<String>,
    rainfall_mm: Option<String>,
    age_years: Option<String>,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub readings: Vec<TransformerReading>,
    pub rejected: Vec<RejectedRow>,
}

/// Load the readings table from a CSV file.
pub fn load_readings(path: &Path) -> Result<LoadOutcome> {
    let file = File::open(path)?;
    load_readings_from(file)
}

/// Load the readings table from any reader.
pub fn load_readings_from<R: Read>(reader: R) -> Result<LoadOutcome> {
    // Flexible so a short row surfaces as a missing field on that row
    // instead of failing the whole file.
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut outcome = LoadOutcome::default();

    for (index, record) in csv_reader.deserialize().enumerate() {
        let raw: RawRow = record?;
        match validate_row(raw, index) {
            Ok(reading) => outcome.readings.push(reading),
            Err(Error::Validation {
                transformer_id,
                field,
                message,
            }) => {
                log::warn!(
                    "Excluding transformer {}: field `{}` {}",
                    transformer_id,
                    field,
                    message
                );
                outcome.rejected.push(RejectedRow {
                    transformer_id,
                    field,
                    message,
                });
            }
            Err(other) => return Err(other),
        }
    }

    log::debug!(
        "Loaded {} readings ({} rejected)",
        outcome.readings.len(),
        outcome.rejected.len()
    );
    Ok(outcome)
}

fn validate_row(raw: RawRow, index: usize) -> Result<TransformerReading> {
    let transformer_id = match raw.transformer_id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            // Header is row 1, so the first data row reads as row 2.
            return Err(Error::validation(
                format!("row {}", index + 2),
                "transformer_id",
                "is missing",
            ));
        }
    };

    Ok(TransformerReading {
        load_percent: numeric_field(&transformer_id, "load_percent", raw.load_percent)?,
        oil_temp_c: numeric_field(&transformer_id, "oil_temp_c", raw.oil_temp_c)?,
        rainfall_mm: numeric_field(&transformer_id, "rainfall_mm", raw.rainfall_mm)?,
        age_years: numeric_field(&transformer_id, "age_years", raw.age_years)?,
        transformer_id,
    })
}

fn numeric_field(transformer_id: &str, field: &str, value: Option<String>) -> Result<f64> {
    let text = value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::validation(transformer_id, field, "is missing"))?;

    let parsed: f64 = text.parse().map_err(|_| {
        Error::validation(transformer_id, field, format!("is not numeric: `{text}`"))
    })?;

    if !parsed.is_finite() {
        return Err(Error::validation(transformer_id, field, "is not finite"));
    }
    Ok(parsed)
}
