//! Writers for the cleaned table, summary record, token counts, and JSON
//! report artifacts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{MetaprepError, Result};
use crate::report::SummaryRecord;
use crate::table::Table;

/// Write a table to a CSV file, header first, rows in table order. Null
/// values render as empty fields, dates as ISO `YYYY-MM-DD`.
pub fn write_table(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    write_table_records(table, &mut writer)?;
    writer.flush().map_err(|e| MetaprepError::Io {
        path: path.as_ref().to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Render a table as a CSV string. Useful for tests and in-memory
/// consumers.
pub fn table_to_csv_string(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_table_records(table, &mut writer)?;
    // into_inner flushes the internal buffer.
    let bytes = writer
        .into_inner()
        .map_err(|e| MetaprepError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_table_records<W: Write>(table: &Table, writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_field()))?;
    }
    Ok(())
}

/// Write one summary record as a single-row CSV with named headers.
pub fn write_summary(record: &SummaryRecord, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.serialize(record)?;
    writer.flush().map_err(|e| MetaprepError::Io {
        path: path.as_ref().to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Write ranked `(token, count)` pairs as a two-column CSV, preserving
/// rank order.
pub fn write_token_frequency(tokens: &[(String, usize)], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(["token", "count"])?;
    for (token, count) in tokens {
        writer.write_record([token.as_str(), &count.to_string()])?;
    }
    writer.flush().map_err(|e| MetaprepError::Io {
        path: path.as_ref().to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Write any serializable report artifact (source metadata, missingness
/// profile, summary record) as a pretty-printed JSON file.
pub fn write_json<T: Serialize>(artifact: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| MetaprepError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, artifact)?;
    writer.flush().map_err(|e| MetaprepError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
