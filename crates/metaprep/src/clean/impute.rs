//! Field imputation: default substitution and required-date filtering.
//!
//! The two policies are independent and ordered. Default substitution
//! never drops rows; required-date filtering drops rows but never
//! substitutes, so a failed date parse cannot be masked by a default.

use chrono::NaiveDate;

use crate::dates;
use crate::error::{MetaprepError, Result};
use crate::table::{Table, Value};

/// A default value to substitute for nulls in one column.
#[derive(Debug, Clone)]
pub struct DefaultFill {
    /// Column to fill.
    pub column: String,
    /// Replacement for null values.
    pub default: String,
}

impl DefaultFill {
    pub fn new(column: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            default: default.into(),
        }
    }
}

/// Replace null values in the designated columns with their configured
/// defaults. Row count is unchanged. Errors with
/// [`MetaprepError::MissingColumn`] before touching any row if a
/// designated column is absent (including one removed by pruning).
pub fn fill_defaults(table: &Table, fills: &[DefaultFill]) -> Result<Table> {
    let mut targets = Vec::with_capacity(fills.len());
    for fill in fills {
        let idx = table
            .column_index(&fill.column)
            .ok_or_else(|| MetaprepError::MissingColumn(fill.column.clone()))?;
        targets.push((idx, fill.default.as_str()));
    }

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            for &(idx, default) in &targets {
                if row[idx].is_null() {
                    row[idx] = Value::Text(default.to_string());
                }
            }
            row
        })
        .collect();

    Ok(Table::new(table.columns().to_vec(), rows))
}

/// Keep only rows whose value in `column` parses as a date, normalizing
/// survivors to a typed [`Value::Date`]. Rows with a null or unparsable
/// value are dropped, never reported as errors; survivors keep their
/// relative order. Idempotent: already-typed dates pass through unchanged.
pub fn require_date(table: &Table, column: &str) -> Result<Table> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| MetaprepError::MissingColumn(column.to_string()))?;

    let rows = table
        .rows()
        .iter()
        .filter_map(|row| {
            let date = parse_cell_date(&row[idx])?;
            let mut row = row.clone();
            row[idx] = Value::Date(date);
            Some(row)
        })
        .collect();

    Ok(Table::new(table.columns().to_vec(), rows))
}

fn parse_cell_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Date(d) => Some(*d),
        Value::Text(s) => dates::parse_flexible(s),
        Value::Integer(y) => NaiveDate::from_ymd_opt(i32::try_from(*y).ok()?, 1, 1),
        Value::Null | Value::Float(_) => None,
    }
}
