use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::dataset::Table;

/// Read a product export (CSV with a header row) into a [`Table`].
///
/// Nothing is validated here beyond CSV well-formedness; the scoring engine
/// owns the schema check so missing columns are reported alongside any weight
/// errors.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open product file at {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header row from {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read row {} from {}", i + 1, path.display()))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Table::new(headers, rows))
}
