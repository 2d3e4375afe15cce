//! Export a loaded curve table to CSV or JSON.
//!
//! The CSV layout mirrors the table: a `date` column followed by one column per
//! tenor, with empty cells for missing values. Values are decimals.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::{CurveRow, Tenor, YieldCurveTable};
use crate::error::AppError;

/// Write the table to a CSV file.
pub fn write_table_csv(path: &Path, table: &YieldCurveTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    let mut header = vec!["date"];
    header.extend(table.columns());
    writer
        .write_record(&header)
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.date.to_string());
        record.extend(row.values.iter().map(|v| v.map(|x| x.to_string()).unwrap_or_default()));
        writer
            .write_record(&record)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}

#[derive(Serialize)]
struct TableFile<'a> {
    tool: &'static str,
    unit: &'static str,
    columns: Vec<&'static str>,
    series_ids: Vec<&'static str>,
    rows: &'a [CurveRow],
}

/// Write the table to a JSON file (`null` marks a missing value).
pub fn write_table_json(path: &Path, table: &YieldCurveTable) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let out = TableFile {
        tool: "ust",
        unit: "decimal",
        columns: table.columns().to_vec(),
        series_ids: Tenor::ALL.iter().map(|t| t.series_id()).collect(),
        rows: table.rows(),
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}
